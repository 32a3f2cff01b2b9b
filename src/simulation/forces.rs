//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct-summation
//! Newtonian gravity term

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct N^2 Newtonian gravity.
///
/// There is no softening: two coincident bodies divide by zero and the
/// resulting non-finite values propagate. The fusion pass is the mitigation
/// for close encounters, not this layer.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2
                let r2 = r.dot(&r);

                // 1 / |r|
                let inv_r = r2.sqrt().recip();

                // 1 / |r|^3
                // (this is what appears in the Newtonian acceleration formula:
                //   a = r / |r|^3
                //   => a = r * (1 / |r|^3) )
                let inv_r3 = inv_r * inv_r * inv_r;

                // Combine G and the distance factor:
                // coef = G / |r|^3
                let coef = self.g * inv_r3;

                // Apply Newton's law:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                // (equal and opposite)
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
