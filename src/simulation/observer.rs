//! Post-step observer capability
//!
//! The engine invokes an optional [`StepObserver`] after every completed
//! step, on the same thread that drives the run. Observers report failures
//! through [`SampleError`], which separates fatal precondition violations
//! from recoverable I/O problems.

use thiserror::Error;

use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Errors raised by a step observer.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The observer's contract on the particle list is not satisfied.
    /// This is a driver bug, not a runtime condition; the run aborts.
    #[error("sampling requires at least {required} particles, system has {actual}")]
    MissingParticle { required: usize, actual: usize },

    /// The record store could not be written. Diagnostics are not
    /// essential to the physics, so the run drops the sample and
    /// continues.
    #[error("record store write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SampleError {
    /// Whether this error must abort the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SampleError::MissingParticle { .. })
    }
}

/// Trait for hooks invoked after each completed integration step
///
/// Called synchronously with a read-only view of the system; bound at
/// most once before the run starts
pub trait StepObserver {
    fn post_step(&mut self, sys: &System, params: &Parameters) -> Result<(), SampleError>;
}
