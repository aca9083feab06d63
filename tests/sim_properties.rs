//! Property tests for the simulation core
//!
//! Quantified over the full parameter ranges the sliders expose.

use proptest::prelude::*;

use velocity_lab::consts::{REGION_HALF, TICK_DT};
use velocity_lab::deg_to_rad;
use velocity_lab::sim::{
    RunParameters, RunPhase, Sample, SimState, tick, velocity_components,
};

fn params_strategy() -> impl Strategy<Value = RunParameters> {
    (1.0f32..=20.0, 0.0f32..=359.0, 1.0f32..=10.0).prop_map(|(speed, angle_deg, duration)| {
        RunParameters {
            speed,
            angle_deg,
            duration,
        }
    })
}

fn run_to_completion(state: &mut SimState) {
    let mut guard = 0u32;
    while state.phase == RunPhase::Running {
        tick(state, TICK_DT);
        guard += 1;
        assert!(guard < 10_000, "tick loop failed to terminate");
    }
}

proptest! {
    /// vx = speed*cos(theta), vy = speed*sin(theta) over the whole range
    #[test]
    fn velocity_decomposition_matches_trig(params in params_strategy()) {
        let v = velocity_components(&params);
        let theta = deg_to_rad(params.angle_deg);
        prop_assert!((v.vx - params.speed * theta.cos()).abs() < 1e-4);
        prop_assert!((v.vy - params.speed * theta.sin()).abs() < 1e-4);
        prop_assert!((v.speed() - params.speed).abs() < 1e-3);
    }

    /// Starting always resets the log to a single origin sample and clears the flag
    #[test]
    fn start_resets_log_and_flag(params in params_strategy()) {
        let mut state = SimState::new();
        state.start(params);
        run_to_completion(&mut state);
        state.start(params);
        prop_assert_eq!(state.trajectory(), &[Sample::ORIGIN]);
        prop_assert!(!state.hit_boundary);
        prop_assert_eq!(state.elapsed, 0.0);
    }

    /// No observable position ever leaves the region, and every run ends in
    /// exactly one of the two termination causes
    #[test]
    fn runs_stay_bounded_and_terminate_exclusively(params in params_strategy()) {
        let mut state = SimState::new();
        state.start(params);

        while state.phase == RunPhase::Running {
            tick(&mut state, TICK_DT);
            prop_assert!(state.pos.x.abs() <= REGION_HALF);
            prop_assert!(state.pos.y.abs() <= REGION_HALF);
        }
        for sample in state.trajectory() {
            prop_assert!(sample.x.abs() <= REGION_HALF);
            prop_assert!(sample.y.abs() <= REGION_HALF);
        }

        prop_assert_eq!(state.phase, RunPhase::Stopped);
        if state.hit_boundary {
            prop_assert!(state.elapsed < state.params.duration);
        } else {
            prop_assert_eq!(state.elapsed, state.params.duration);
        }
    }

    /// Reset from any point of any run restores the initial observable state
    #[test]
    fn reset_restores_initial_state(params in params_strategy(), ticks in 0u32..300) {
        let mut state = SimState::new();
        state.start(params);
        for _ in 0..ticks {
            tick(&mut state, TICK_DT);
        }

        state.reset();
        prop_assert_eq!(state.phase, RunPhase::Idle);
        prop_assert_eq!(state.trajectory(), &[Sample::ORIGIN]);
        prop_assert_eq!(state.physical_position(), glam::Vec2::ZERO);
        prop_assert!(!state.hit_boundary);
        prop_assert!(state.quiz_feedback.is_none());
    }

    /// Sample times strictly increase and start at zero
    #[test]
    fn log_is_ordered(params in params_strategy()) {
        let mut state = SimState::new();
        state.start(params);
        run_to_completion(&mut state);

        let log = state.trajectory();
        prop_assert_eq!(log[0], Sample::ORIGIN);
        for pair in log.windows(2) {
            prop_assert!(pair[1].time > pair[0].time);
        }
    }
}
