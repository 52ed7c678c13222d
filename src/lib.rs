pub mod configuration;
pub mod output;
pub mod simulation;

pub use simulation::engine::{Engine, EngineError};
pub use simulation::forces::{ForceModel, ForceSet, LinearDrag};
pub use simulation::integrator::{leapfrog_step, symplectic_euler_step, IntegratorKind};
pub use simulation::observer::{SampleError, StepObserver};
pub use simulation::params::Parameters;
pub use simulation::scenario::{build_scenario, BuildError};
pub use simulation::states::{NVec3, Particle, System};

pub use configuration::config::{
    ConfigError, EngineConfig, IntegratorConfig, OutputConfig, ParametersConfig, ParticleConfig,
    ScenarioConfig,
};

pub use output::cadence::Cadence;
pub use output::record::RecordStore;
pub use output::sampler::SamplingSink;
