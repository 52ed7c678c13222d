//! Core state types for the drag-force simulation.
//!
//! Defines the per-body `Particle` struct and the `System` that owns
//! the particle list together with the current simulation time `t`
//! and step size `dt`.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub a: NVec3, // acceleration, per-step scratch overwritten by the force pass
    pub m: f64,   // mass, zero for massless test particles
}

impl Particle {
    /// Particle with the given initial position, velocity, and mass.
    /// Acceleration starts at zero; the force pass overwrites it anyway.
    pub fn new(x: NVec3, v: NVec3, m: f64) -> Self {
        Self {
            x,
            v,
            a: NVec3::zeros(),
            m,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub particles: Vec<Particle>, // insertion order is each particle's identity index
    pub t: f64,  // current simulated time
    pub dt: f64, // current step size
}

impl System {
    /// Empty system at t = 0 with the given step size.
    pub fn new(dt: f64) -> Self {
        Self {
            particles: Vec::new(),
            t: 0.0,
            dt,
        }
    }

    /// Append a particle and return its assigned index.
    pub fn add_particle(&mut self, p: Particle) -> usize {
        self.particles.push(p);
        self.particles.len() - 1
    }
}
