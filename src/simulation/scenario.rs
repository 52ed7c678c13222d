//! Build a fully-initialized simulation engine from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle: numerical parameters, system state with particles at t = 0,
//! the active drag force term, and the sampling sink registered as the
//! post-step observer with its record store truncated.

use thiserror::Error;

use crate::configuration::config::{
    ConfigError, IntegratorConfig, ParticleConfig, ScenarioConfig,
};
use crate::output::cadence::Cadence;
use crate::output::record::RecordStore;
use crate::output::sampler::SamplingSink;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, LinearDrag};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, Particle, System};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to set up record store: {0}")]
    RecordStore(#[from] std::io::Error),
}

/// Map a validated configuration into a ready-to-run [`Engine`].
pub fn build_scenario(cfg: ScenarioConfig) -> Result<Engine, BuildError> {
    cfg.validate()?;

    // Particles: map `ParticleConfig` -> runtime `Particle` using nalgebra vectors
    let particles: Vec<Particle> = cfg
        .particles
        .iter()
        .map(|pc: &ParticleConfig| {
            Particle::new(
                NVec3::new(pc.x[0], pc.x[1], pc.x[2]),
                NVec3::new(pc.v[0], pc.v[1], pc.v[2]),
                pc.m,
            )
        })
        .collect();

    // Initial system state: particles at t = 0
    let mut system = System::new(cfg.parameters.h0);
    system.particles = particles;

    // Parameters (runtime) from ParametersConfig
    let p_cfg = &cfg.parameters;
    let sample_every = p_cfg.sample_every.unwrap_or(100.0);
    let parameters = Parameters {
        t_end: p_cfg.t_end,
        h0: p_cfg.h0,
        boxsize: p_cfg.boxsize,
        drag_k: p_cfg.drag,
        sample_every,
        integrator: match cfg.engine.integrator {
            IntegratorConfig::Leapfrog => IntegratorKind::Leapfrog,
            IntegratorConfig::SymplecticEuler => IntegratorKind::SymplecticEuler,
        },
    };

    // Forces: construct a ForceSet and register the drag term
    let forces = ForceSet::new().with(LinearDrag {
        k: parameters.drag_k,
    });

    // Sampling sink: truncate the record store, gate progress reports to
    // roughly sample_every steps of the initial step size
    let store = RecordStore::create(&cfg.output.record_path)?;
    let sink = SamplingSink::new(store, Cadence::new(sample_every * parameters.h0));

    let mut engine = Engine::new(parameters, system, forces);
    engine.set_observer(Box::new(sink));
    Ok(engine)
}
