//! Fixed-step time integrator for the N-body system
//!
//! Provides the semi-implicit (symplectic) Euler step driven by
//! `AccelSet` and `Parameters`

use super::states::{System, NVec2};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the system by one step using semi-implicit Euler.
///
/// The velocity update completes for all bodies before any position moves,
/// so positions advance at the already-updated velocities. Each body's
/// `prev_x` is saved immediately before its position update; the boundary
/// resolver reads it to detect wall crossings.
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt; // time step dt

    // Allocate a vector of accelerations, one per body, initialized to zero
    let mut accel = vec![NVec2::zeros(); n];

    // Ask the force set to accumulate accelerations at time t into accel,
    // based on the current system state sys
    forces.accumulate_accels(sys.t, &*sys, &mut accel);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += dt * *a;
    }

    // Drift at the new velocities: x_n+1 = x_n + dt * v_n+1,
    // saving x_n into prev_x first
    for b in sys.bodies.iter_mut() {
        b.prev_x = b.x;
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
