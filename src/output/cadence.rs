//! Output cadence gate
//!
//! Throttles expensive diagnostics to roughly one firing per `interval`
//! of simulated time, independent of the (possibly non-uniform) step
//! size actually taken by the integrator.

/// Fires when a completed step has crossed an integer multiple of the
/// sampling interval. Stateless: recomputed from the current time and
/// step size on every call, so monotonic time gives at most one fire
/// per boundary and no missed boundary while `dt <= interval`.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    pub interval: f64,
}

impl Cadence {
    pub fn new(interval: f64) -> Self {
        Self { interval }
    }

    /// `t` is the time after the just-completed step of size `dt`.
    /// Returns true iff that step increased the count of elapsed
    /// intervals, which is robust against step sizes that do not
    /// divide the interval exactly.
    pub fn should_sample(&self, t: f64, dt: f64) -> bool {
        if self.interval <= 0.0 {
            return false;
        }
        (t / self.interval).floor() != ((t - dt) / self.interval).floor()
    }
}
