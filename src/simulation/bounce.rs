//! Boundary collision resolver
//!
//! Reflects bodies off the four view walls. A crossing is detected by
//! comparing the inside/outside classification of a body's previous and
//! current position; the specific wall is found with a three-point
//! monotonicity test, so a body entering from outside the view bounces the
//! same way as one leaving it.

use super::states::System;
use super::params::Parameters;

/// True iff `b` lies between `a` and `c` inclusive, in either direction.
pub fn is_monotonic(a: f64, b: f64, c: f64) -> bool {
    (a <= b && b <= c) || (c <= b && b <= a)
}

/// True iff `(x, y)` lies inside the view rectangle, walls included.
pub fn in_view(x: f64, y: f64, params: &Parameters) -> bool {
    let hw = params.half_width();
    let hh = params.half_height();
    -hh <= y && y <= hh && -hw <= x && x <= hw
}

/// Resolve wall collisions for every body that crossed a view boundary
/// during the last position update.
///
/// Each axis is handled independently; a corner bounce is the composition of
/// both axis resolutions in the same tick. Both walls of one axis may trigger
/// in a single tick when the reflected overshoot reaches past the opposite
/// wall. The overshoot distance itself is scaled by `cor`, so small
/// restitution values settle a body near the wall instead of re-entering it
/// by a fixed reflection distance.
pub fn resolve_bounces(sys: &mut System, params: &Parameters) {
    let hw = params.half_width();
    let hh = params.half_height();
    let cor = params.cor;

    for b in sys.bodies.iter_mut() {
        // Only bodies whose inside/outside classification changed this tick
        if in_view(b.prev_x.x, b.prev_x.y, params) == in_view(b.x.x, b.x.y, params) {
            continue;
        }

        // Lower wall (+height/2) swept between prev_y and y
        if is_monotonic(b.prev_x.y, hh, b.x.y) {
            b.x.y = hh - (b.x.y - hh) * cor;
            b.v.y *= -cor;
        }

        // Upper wall (-height/2)
        if is_monotonic(b.prev_x.y, -hh, b.x.y) {
            b.x.y = -hh + (-hh - b.x.y) * cor;
            b.v.y *= -cor;
        }

        // Right wall (+width/2)
        if is_monotonic(b.prev_x.x, hw, b.x.x) {
            b.x.x = hw - (b.x.x - hw) * cor;
            b.v.x *= -cor;
        }

        // Left wall (-width/2)
        if is_monotonic(b.prev_x.x, -hw, b.x.x) {
            b.x.x = -hw + (-hw - b.x.x) * cor;
            b.v.x *= -cor;
        }
    }
}
