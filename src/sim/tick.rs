//! Fixed timestep simulation tick
//!
//! Advances the run by one 50 ms step. Exactly one of two terminations
//! ends a run, first one encountered wins:
//! - duration expiry (boundary flag stays false)
//! - boundary clamp (boundary flag set, elapsed stays short of duration)

use super::state::{RunPhase, Sample, SimState};
use crate::consts::REGION_HALF;

/// Advance the simulation by one fixed timestep.
///
/// No-op unless the phase is Running, so the frame loop may call this
/// unconditionally; gating on phase is what guarantees at most one active
/// tick loop and no integration after a stop.
pub fn tick(state: &mut SimState, dt: f32) {
    if state.phase != RunPhase::Running {
        return;
    }

    state.tick_count += 1;
    let elapsed = state.tick_count as f32 * dt;

    // Duration expiry: pin the clock to the requested duration and stop.
    if elapsed >= state.params.duration {
        state.elapsed = state.params.duration;
        state.phase = RunPhase::Stopped;
        log::info!(
            "run complete: duration {}s reached at ({:.2}, {:.2})",
            state.params.duration,
            state.pos.x,
            -state.pos.y
        );
        return;
    }
    state.elapsed = elapsed;

    // Euler step in render space: screen y grows downward, so a positive
    // (upward) vy decreases y.
    let candidate_x = state.pos.x + state.velocity.vx * dt;
    let candidate_y = state.pos.y - state.velocity.vy * dt;

    let bounded_x = candidate_x.clamp(-REGION_HALF, REGION_HALF);
    let bounded_y = candidate_y.clamp(-REGION_HALF, REGION_HALF);

    if bounded_x != candidate_x || bounded_y != candidate_y {
        // Boundary hit: keep the clamped position, flag it, stop short.
        state.pos.x = bounded_x;
        state.pos.y = bounded_y;
        state.hit_boundary = true;
        state.phase = RunPhase::Stopped;
        log::info!(
            "run stopped at boundary: ({:.2}, {:.2}) after {:.2}s",
            state.pos.x,
            -state.pos.y,
            state.elapsed
        );
        return;
    }

    state.pos.x = candidate_x;
    state.pos.y = candidate_y;
    state.push_sample(Sample {
        time: state.elapsed,
        x: state.pos.x,
        y: -state.pos.y,
    });
}
