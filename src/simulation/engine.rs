//! Simulation engine: owns the system state, force set, and hooks,
//! and drives the step loop to a target end time
//!
//! One step is ForceEval -> Advance -> PostStep. The force pass and the
//! observer run in-line on the calling thread; there is no cancellation,
//! the loop ends when `sys.t` reaches the target.

use thiserror::Error;

use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::{leapfrog_step, symplectic_euler_step, IntegratorKind};
use crate::simulation::observer::{SampleError, StepObserver};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("post-step observer failed: {0}")]
    Observer(#[from] SampleError),
}

/// Fully-initialized simulation context: engine settings, numerical
/// parameters, current system state, active force terms, and the
/// optional post-step observer.
pub struct Engine {
    pub params: Parameters,
    pub system: System,
    pub forces: ForceSet,
    observer: Option<Box<dyn StepObserver>>,
}

impl Engine {
    pub fn new(params: Parameters, system: System, forces: ForceSet) -> Self {
        Self {
            params,
            system,
            forces,
            observer: None,
        }
    }

    /// Bind the post-step observer. Call before the run; hooks are not
    /// re-registered once stepping has started.
    pub fn set_observer(&mut self, observer: Box<dyn StepObserver>) {
        self.observer = Some(observer);
    }

    /// Drive the step loop until `system.t >= t_end`.
    ///
    /// After each completed step the observer (if bound) is invoked with
    /// the updated state. A fatal observer error aborts the run; an I/O
    /// error only drops that step's sample.
    pub fn run_to_time(&mut self, t_end: f64) -> Result<(), EngineError> {
        while self.system.t < t_end {
            match self.params.integrator {
                IntegratorKind::Leapfrog => leapfrog_step(&mut self.system, &self.forces),
                IntegratorKind::SymplecticEuler => {
                    symplectic_euler_step(&mut self.system, &self.forces)
                }
            }

            if let Some(observer) = self.observer.as_mut() {
                if let Err(e) = observer.post_step(&self.system, &self.params) {
                    if e.is_fatal() {
                        return Err(e.into());
                    }
                    log::warn!("sample dropped at t = {:e}: {}", self.system.t, e);
                }
            }
        }
        Ok(())
    }
}
