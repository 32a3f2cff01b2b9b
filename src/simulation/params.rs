//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the immutable per-run condition set:
//! - view extents (walls sit at half the width/height),
//! - gravitational constant, step size and stop time,
//! - wall restitution coefficient and fusion distance threshold,
//! - seed for the random fill of missing bodies

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // step size
    pub g: f64, // gravitational constant
    pub cor: f64, // wall restitution coefficient
    pub merge_dist: f64, // fusion distance threshold
    pub width: u16, // visible range width
    pub height: u16, // visible range height
    pub seed: u64, // seed for random body generation
}

impl Parameters {
    /// Horizontal wall offset from the origin.
    pub fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    /// Vertical wall offset from the origin.
    pub fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }
}
