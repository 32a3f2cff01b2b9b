//! Character-grid frame assembly.
//!
//! Builds the full frame as a string of `\r\n`-terminated lines: a bordered
//! board with one `o` per visible body, followed by a status line and the
//! coordinates of the first few bodies. Pure string assembly; the terminal
//! driver in [`super::term`] owns all I/O.

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Display;
use crate::simulation::states::System;

/// How many per-body coordinate lines are printed below the board.
const COORD_LINES: usize = 8;

pub fn render_frame(sys: &System, params: &Parameters, display: &Display) -> String {
    let cols = usize::from(params.width) + 2;
    let rows = usize::from(params.height) + 2;

    let mut board = vec![vec![b' '; cols]; rows];

    // Bodies; the origin maps to the view center, cells truncate
    for b in &sys.bodies {
        let row = (b.x.y / display.cell_y + f64::from(params.height / 2) + 1.0) as isize;
        let col = (b.x.x / display.cell_x + f64::from(params.width / 2) + 1.0) as isize;
        if (0..rows as isize).contains(&row) && (0..cols as isize).contains(&col) {
            board[row as usize][col as usize] = b'o';
        }
    }

    // Top and bottom border
    for x in 1..cols - 1 {
        board[0][x] = b'-';
        board[rows - 1][x] = b'-';
    }

    // Side border
    for y in 1..rows - 1 {
        board[y][0] = b'|';
        board[y][cols - 1] = b'|';
    }

    // Corners
    board[0][0] = b'+';
    board[0][cols - 1] = b'+';
    board[rows - 1][0] = b'+';
    board[rows - 1][cols - 1] = b'+';

    let mut out = String::with_capacity(rows * (cols + 2) + 64);
    for row in &board {
        out.push_str(&String::from_utf8_lossy(row));
        out.push_str("\r\n");
    }

    out.push_str(&format!(
        "t = {:6.1}, cor = {:4.2}, bodies = {:2}\r\n",
        sys.t,
        params.cor,
        sys.len()
    ));
    for (i, b) in sys.bodies.iter().take(COORD_LINES).enumerate() {
        out.push_str(&format!(
            "obj[{i}].y = {:8.2}, obj[{i}].x = {:8.2}\r\n",
            b.x.y / display.report_unit,
            b.x.x / display.report_unit,
        ));
    }

    out
}
