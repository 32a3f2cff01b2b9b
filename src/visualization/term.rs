//! Terminal driver for the live ASCII view.
//!
//! Owns the crossterm session: alternate screen, raw mode, hidden cursor.
//! Each frame is redrawn in place from the home position. Pacing is purely
//! cosmetic; it never feeds back into the simulation state.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::frame::render_frame;
use crate::simulation::scenario::Scenario;

/// Run the simulation loop until `t_end` is reached or the user quits with
/// `q` or Escape.
pub fn run(mut scenario: Scenario) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(&mut scenario, &mut stdout);

    // Restore the terminal even when the loop failed
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn run_loop(scenario: &mut Scenario, stdout: &mut io::Stdout) -> io::Result<()> {
    let Scenario {
        engine,
        parameters,
        system,
        forces,
        display,
    } = scenario;

    draw(stdout, &render_frame(system, parameters, display))?;

    while system.t <= parameters.t_end {
        if pause_or_quit(display.frame_delay)? {
            break;
        }
        engine.tick(system, forces, parameters);
        draw(stdout, &render_frame(system, parameters, display))?;
    }

    Ok(())
}

fn draw(stdout: &mut io::Stdout, frame: &str) -> io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        Clear(ClearType::FromCursorDown),
        Print(frame)
    )?;
    stdout.flush()?;
    Ok(())
}

/// Wait one frame interval, returning true if the user asked to quit.
fn pause_or_quit(delay: Duration) -> io::Result<bool> {
    if event::poll(delay)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
