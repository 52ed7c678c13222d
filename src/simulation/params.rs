//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - initial step size and end time,
//! - spatial bound of the simulation box,
//! - drag coefficient,
//! - progress-report cadence in units of initial steps

use crate::simulation::integrator::IntegratorKind;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64,        // target end time
    pub h0: f64,           // initial step size
    pub boxsize: f64,      // spatial bound
    pub drag_k: f64,       // drag coefficient
    pub sample_every: f64, // progress reports roughly every sample_every * h0 of simulated time
    pub integrator: IntegratorKind, // time-stepping scheme
}
