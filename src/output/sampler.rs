//! Per-step sampling sink
//!
//! Implements the post-step observer: a cadence-gated progress report
//! plus one record line per step with the quantities being tracked for
//! this problem (time, position x of particle 0, velocity x of
//! particle 1).

use crate::output::cadence::Cadence;
use crate::output::record::RecordStore;
use crate::simulation::observer::{SampleError, StepObserver};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Number of particles the record format reads from.
const SAMPLED_PARTICLES: usize = 2;

pub struct SamplingSink {
    store: RecordStore,
    cadence: Cadence,
}

impl SamplingSink {
    pub fn new(store: RecordStore, cadence: Cadence) -> Self {
        Self { store, cadence }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

impl StepObserver for SamplingSink {
    fn post_step(&mut self, sys: &System, params: &Parameters) -> Result<(), SampleError> {
        // Progress report, throttled by the cadence gate
        if self.cadence.should_sample(sys.t, sys.dt) {
            log::info!(
                "t = {:e} / {:e} ({:.1}%)",
                sys.t,
                params.t_end,
                100.0 * sys.t / params.t_end
            );
        }

        // The record format reads particle 0's position and particle 1's
        // velocity, so both must exist. Checked, not assumed.
        if sys.particles.len() < SAMPLED_PARTICLES {
            return Err(SampleError::MissingParticle {
                required: SAMPLED_PARTICLES,
                actual: sys.particles.len(),
            });
        }

        // One line per step, tab-separated, scientific notation
        let line = format!(
            "{:e}\t{:e}\t{:e}",
            sys.t, sys.particles[0].x.x, sys.particles[1].v.x
        );
        self.store.append_line(&line)?;
        Ok(())
    }
}
