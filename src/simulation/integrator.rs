//! Fixed-step time integrators for the particle system
//!
//! Provides velocity-Verlet (leapfrog) and symplectic-Euler steps,
//! both driven by a [`ForceSet`]. The force pass runs before every
//! sub-step that consumes accelerations, so force terms see current
//! velocities each time.

use super::forces::ForceSet;
use super::states::System;

/// Which time-stepping scheme advances the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    Leapfrog,        // velocity-Verlet, two force evaluations per step
    SymplecticEuler, // one force evaluation per step
}

/// Advance the system by one step using velocity-Verlet
/// Uses two force evaluations per step and updates positions, velocities,
/// and `sys.t` in-place based on `sys.dt`
pub fn leapfrog_step(sys: &mut System, forces: &ForceSet) {
    if sys.particles.is_empty() {
        return;
    }

    let dt = sys.dt; // time step dt
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from the state at time t_n
    forces.apply(sys);

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for p in sys.particles.iter_mut() {
        p.v += half_dt * p.a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for p in sys.particles.iter_mut() {
        p.x += dt * p.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;

    // a_n+1 from the state at time t_n+1
    forces.apply(sys);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for p in sys.particles.iter_mut() {
        p.v += half_dt * p.a;
    }
}

/// Advance the system by one step using symplectic Euler
/// One force evaluation per step: kick then drift
pub fn symplectic_euler_step(sys: &mut System, forces: &ForceSet) {
    if sys.particles.is_empty() {
        return;
    }

    let dt = sys.dt;

    // a_n from the state at time t_n
    forces.apply(sys);

    // Kick: v_n+1 = v_n + dt * a_n
    for p in sys.particles.iter_mut() {
        p.v += dt * p.a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for p in sys.particles.iter_mut() {
        p.x += dt * p.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;
}
