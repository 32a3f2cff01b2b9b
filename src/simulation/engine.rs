//! High-level runtime engine settings
//!
//! Selects which optional phases (wall bouncing, body fusion) run in a tick
//! and sequences one full simulation step

use super::states::System;
use super::forces::AccelSet;
use super::params::Parameters;
use super::integrator::semi_implicit_euler;
use super::bounce::resolve_bounces;
use super::fusion::fuse_bodies;

#[derive(Debug, Clone)]
pub struct Engine {
    pub bounce: bool, // reflect bodies off the view walls
    pub fusion: bool, // merge bodies closer than the fusion threshold
}

impl Engine {
    /// Advance the simulation by one tick.
    ///
    /// Phase order is fixed: velocity kick and position drift for all bodies,
    /// then wall bounces, then fusion. Each phase reads the fully-updated
    /// state of the previous one.
    pub fn tick(&self, sys: &mut System, forces: &AccelSet, params: &Parameters) {
        semi_implicit_euler(sys, forces, params);
        if self.bounce {
            resolve_bounces(sys, params);
        }
        if self.fusion {
            fuse_bodies(sys, params);
        }
    }
}
