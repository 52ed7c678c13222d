//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integrator selection)
//! - [`ParametersConfig`] – numerical parameters and the drag coefficient
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`OutputConfig`]     – record store location
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "leapfrog"  # or "euler"
//!
//! parameters:
//!   t_end: 40.0             # total simulation time
//!   h0: 1.0e-4              # initial step size
//!   boxsize: 10.0           # spatial bound
//!   drag: 1.0               # drag coefficient
//!   sample_every: 100       # progress report every ~100 initial steps
//!
//! output:
//!   record_path: "r.txt"
//!
//! particles:
//!   - x: [ 1.0, 0.0, 0.0 ]
//!     v: [ -1.0, 0.0, 0.0 ]
//!     m: 0.0
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 0.0
//! ```
//!
//! `validate` rejects ill-formed configurations before a run starts, so
//! the engine never sees a non-positive step size or drag coefficient.

use serde::Deserialize;
use thiserror::Error;

/// Rejected configuration, reported before `run_to_time` is ever invoked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("step size h0 must be strictly positive, got {0}")]
    NonPositiveStep(f64),
    #[error("end time t_end must be strictly positive, got {0}")]
    NonPositiveEndTime(f64),
    #[error("drag coefficient must be strictly positive, got {0}")]
    NonPositiveDrag(f64),
    #[error("progress cadence sample_every must be strictly positive, got {0}")]
    NonPositiveCadence(f64),
    #[error("particle {index}: {field} must have exactly 3 components, got {len}")]
    BadVector {
        index: usize,
        field: &'static str,
        len: usize,
    },
    #[error("sampling reads particles 0 and 1, so at least 2 particles are required, got {0}")]
    TooFewParticles(usize),
}

/// Which integrator method is used by the engine
/// `integrator: "leapfrog"` or `integrator: "euler"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "leapfrog")] // velocity-Verlet, two force evaluations per step
    Leapfrog,

    #[serde(rename = "euler")] // symplectic Euler, one force evaluation per step
    SymplecticEuler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,   // target end time
    pub h0: f64,      // initial step size
    pub boxsize: f64, // spatial bound
    pub drag: f64,    // drag coefficient
    pub sample_every: Option<f64>, // progress reports every ~sample_every initial steps, default 100
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position vector in simulation units
    pub v: Vec<f64>, // initial velocity vector in simulation units per time unit
    pub m: f64,      // mass, zero for massless test particles
}

/// Record store location for per-step diagnostics
#[derive(Deserialize, Debug)]
pub struct OutputConfig {
    pub record_path: String,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub output: OutputConfig,
    pub particles: Vec<ParticleConfig>,
}

impl ScenarioConfig {
    /// Reject ill-formed configurations at configuration time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.parameters;
        if p.h0 <= 0.0 {
            return Err(ConfigError::NonPositiveStep(p.h0));
        }
        if p.t_end <= 0.0 {
            return Err(ConfigError::NonPositiveEndTime(p.t_end));
        }
        if p.drag <= 0.0 {
            return Err(ConfigError::NonPositiveDrag(p.drag));
        }
        if let Some(every) = p.sample_every {
            if every <= 0.0 {
                return Err(ConfigError::NonPositiveCadence(every));
            }
        }
        for (index, pc) in self.particles.iter().enumerate() {
            if pc.x.len() != 3 {
                return Err(ConfigError::BadVector {
                    index,
                    field: "x",
                    len: pc.x.len(),
                });
            }
            if pc.v.len() != 3 {
                return Err(ConfigError::BadVector {
                    index,
                    field: "v",
                    len: pc.v.len(),
                });
            }
        }
        if self.particles.len() < 2 {
            return Err(ConfigError::TooFewParticles(self.particles.len()));
        }
        Ok(())
    }
}
