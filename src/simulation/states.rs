//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` positions and velocities
//! - `System` holding the live body set and the current simulation time `t`
//!
//! The body storage is an arena: allocated once at [`MAX_BODIES`] capacity,
//! shrunk in place by fusion, never reallocated during a run.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Fixed storage capacity for a run. Requests beyond this are rejected at
/// scenario build time.
pub const MAX_BODIES: usize = 100;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub prev_x: NVec2, // position at the start of the current tick
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

impl Body {
    /// New body with `prev_x` initialized to the starting position.
    pub fn new(m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            x,
            prev_x: x,
            v,
            m,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // live body set, len() is the live count
    pub t: f64, // time
}

impl System {
    /// Build a system at t = 0 with storage reserved up to [`MAX_BODIES`].
    pub fn new(bodies: Vec<Body>) -> Self {
        let mut storage = Vec::with_capacity(MAX_BODIES);
        storage.extend(bodies);
        Self {
            bodies: storage,
            t: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Remove the entries flagged in `dead`, preserving the relative order of
    /// the survivors. Shrinks the live count in place and returns the number
    /// of removed bodies. `dead` must carry one flag per live body.
    pub fn compact(&mut self, dead: &[bool]) -> usize {
        debug_assert_eq!(dead.len(), self.bodies.len());
        let before = self.bodies.len();
        let mut idx = 0;
        self.bodies.retain(|_| {
            let keep = !dead[idx];
            idx += 1;
            keep
        });
        before - self.bodies.len()
    }
}
