//! Force / acceleration contributors for the simulation engine
//!
//! Defines the [`ForceModel`] trait for additional-force terms and a
//! simple velocity-dependent linear drag. Terms are collected in a
//! [`ForceSet`] whose contributions are summed into each particle's
//! acceleration field.

use crate::simulation::states::{NVec3, Particle, System};

/// Collection of acceleration terms (drag, thrust, etc.)
/// Each term implements [`ForceModel`] and their contributions are summed
/// into each particle's `a` field
pub struct ForceSet {
    terms: Vec<Box<dyn ForceModel + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl ForceModel + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Recompute every particle's acceleration at time `sys.t`.
    ///
    /// Accelerations are zeroed first and then each term adds its
    /// contribution, so a full pass always overwrites whatever the
    /// previous pass left behind. Calling this twice on an unchanged
    /// system produces identical accelerations both times.
    pub fn apply(&self, sys: &mut System) {
        // Zero the scratch accelerations
        for p in sys.particles.iter_mut() {
            p.a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        let t = sys.t;
        for term in &self.terms {
            term.accumulate(t, &mut sys.particles);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on the particle list
/// Implementations add their contribution into each particle's `a`
pub trait ForceModel {
    fn accumulate(&self, t: f64, particles: &mut [Particle]);
}

/// Velocity-dependent linear drag: a = -k * v per particle
///
/// Local and O(N), no pairwise interaction. Independent of position
/// and mass, so massless test particles are decelerated like any
/// other body.
pub struct LinearDrag {
    pub k: f64, // drag coefficient, strictly positive
}

impl ForceModel for LinearDrag {
    fn accumulate(&self, _t: f64, particles: &mut [Particle]) {
        for p in particles.iter_mut() {
            // a += -k * v, componentwise
            p.a -= self.k * p.v;
        }
    }
}
