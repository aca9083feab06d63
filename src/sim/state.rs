//! Run state and core simulation types
//!
//! A "run" is one Start-to-Stop cycle. All state a run needs lives in
//! explicit fields here (parameter snapshot, tick count, trajectory log)
//! so that rapid Start/Reset sequences can never observe stale values.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{Velocity, velocity_components};
use super::quiz::{self, QuizFeedback};
use crate::consts::*;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Before the first start, or after a reset
    #[default]
    Idle,
    /// Tick loop active
    Running,
    /// Duration elapsed or boundary hit
    Stopped,
}

/// User-chosen run parameters, captured by value when a run starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Speed in m/s, [1, 20]
    pub speed: f32,
    /// Launch angle in degrees, [0, 359]
    pub angle_deg: f32,
    /// Run duration in seconds, [1, 10]
    pub duration: f32,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            speed: 10.0,
            angle_deg: 0.0,
            duration: 5.0,
        }
    }
}

impl RunParameters {
    /// Copy of these parameters with every field forced into its slider range.
    ///
    /// The controls already constrain input; this is the core's own guard so
    /// its invariants never depend on the presentation layer.
    pub fn clamped(&self) -> Self {
        Self {
            speed: self.speed.clamp(SPEED_MIN, SPEED_MAX),
            angle_deg: self.angle_deg.clamp(ANGLE_MIN, ANGLE_MAX),
            duration: self.duration.clamp(DURATION_MIN, DURATION_MAX),
        }
    }
}

/// One logged (time, x, y) observation, in physical space (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f32,
    pub x: f32,
    pub y: f32,
}

impl Sample {
    /// The log always opens with this entry
    pub const ORIGIN: Sample = Sample {
        time: 0.0,
        x: 0.0,
        y: 0.0,
    };
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Parameter snapshot for the current/last run
    pub params: RunParameters,
    /// Velocity components, derived once per run
    pub velocity: Velocity,
    /// Current phase
    pub phase: RunPhase,
    /// Position in render space (y grows downward), clamped to ±REGION_HALF
    pub pos: Vec2,
    /// Ticks committed since run start; elapsed time is tick_count * TICK_DT
    pub tick_count: u64,
    /// Elapsed simulated seconds; pinned to `params.duration` on expiry
    pub elapsed: f32,
    /// True iff the run stopped by hitting the region boundary
    pub hit_boundary: bool,
    /// Feedback from the most recent quiz submission, if any
    pub quiz_feedback: Option<QuizFeedback>,
    /// Append-only (time, x, y) log; reset to a single origin sample per run
    trajectory: Vec<Sample>,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    /// Create an idle simulation with default parameters
    pub fn new() -> Self {
        Self {
            params: RunParameters::default(),
            velocity: Velocity::default(),
            phase: RunPhase::Idle,
            pos: Vec2::ZERO,
            tick_count: 0,
            elapsed: 0.0,
            hit_boundary: false,
            quiz_feedback: None,
            trajectory: vec![Sample::ORIGIN],
        }
    }

    /// Whether Start is currently permitted (the Start control is disabled
    /// while Running, which is what keeps a second tick loop from existing)
    #[inline]
    pub fn can_start(&self) -> bool {
        self.phase != RunPhase::Running
    }

    /// Begin a new run from the given parameters.
    ///
    /// Permitted from Idle or Stopped only; returns false (and leaves state
    /// untouched) if invoked while Running. Snapshots the parameters,
    /// derives velocity, and resets position, log, flags, and feedback.
    pub fn start(&mut self, params: RunParameters) -> bool {
        if !self.can_start() {
            log::warn!("start ignored: run already in progress");
            return false;
        }

        self.params = params.clamped();
        self.velocity = velocity_components(&self.params);
        self.phase = RunPhase::Running;
        self.pos = Vec2::ZERO;
        self.tick_count = 0;
        self.elapsed = 0.0;
        self.hit_boundary = false;
        self.quiz_feedback = None;
        self.trajectory.clear();
        self.trajectory.push(Sample::ORIGIN);

        log::info!(
            "run started: speed={} angle={}° duration={}s (vx={:.2}, vy={:.2})",
            self.params.speed,
            self.params.angle_deg,
            self.params.duration,
            self.velocity.vx,
            self.velocity.vy
        );
        true
    }

    /// Return to Idle from any phase, cancelling an active run.
    pub fn reset(&mut self) {
        self.phase = RunPhase::Idle;
        self.pos = Vec2::ZERO;
        self.tick_count = 0;
        self.elapsed = 0.0;
        self.hit_boundary = false;
        self.quiz_feedback = None;
        self.trajectory.clear();
        self.trajectory.push(Sample::ORIGIN);
        log::info!("simulation reset");
    }

    /// The trajectory log, oldest sample first
    #[inline]
    pub fn trajectory(&self) -> &[Sample] {
        &self.trajectory
    }

    /// Append a committed tick's sample. Only the tick loop calls this.
    pub(super) fn push_sample(&mut self, sample: Sample) {
        debug_assert_eq!(self.phase, RunPhase::Running);
        self.trajectory.push(sample);
    }

    /// Current position in physical space (y grows upward)
    #[inline]
    pub fn physical_position(&self) -> Vec2 {
        Vec2::new(self.pos.x, -self.pos.y)
    }

    /// Straight-line distance from the origin to the current position
    #[inline]
    pub fn distance_from_origin(&self) -> f32 {
        self.pos.length()
    }

    /// The quiz opens once a run has stopped with time on the clock.
    /// `elapsed > 0` is guaranteed by construction in Stopped (duration is
    /// at least 1 s and the expiry tick pins elapsed to it), so the
    /// reference velocity's divisor can never be zero.
    #[inline]
    pub fn quiz_available(&self) -> bool {
        self.phase == RunPhase::Stopped && self.elapsed > 0.0
    }

    /// Judge a quiz answer against this run's reference average velocity.
    ///
    /// May be called repeatedly with different guesses for the same run.
    /// Returns None (and records nothing) unless the quiz is available.
    pub fn submit_answer(&mut self, answer: &str) -> Option<QuizFeedback> {
        if !self.quiz_available() {
            return None;
        }
        let feedback = quiz::check_answer(answer, self.distance_from_origin(), self.elapsed);
        self.quiz_feedback = Some(feedback.clone());
        Some(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_at_origin() {
        let state = SimState::new();
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.pos, Vec2::ZERO);
        assert_eq!(state.trajectory(), &[Sample::ORIGIN]);
        assert!(!state.hit_boundary);
        assert!(!state.quiz_available());
    }

    #[test]
    fn test_start_snapshots_and_clamps_params() {
        let mut state = SimState::new();
        let started = state.start(RunParameters {
            speed: 50.0,
            angle_deg: 400.0,
            duration: 0.2,
        });
        assert!(started);
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.params.speed, SPEED_MAX);
        assert_eq!(state.params.angle_deg, ANGLE_MAX);
        assert_eq!(state.params.duration, DURATION_MIN);
    }

    #[test]
    fn test_start_refused_while_running() {
        let mut state = SimState::new();
        assert!(state.start(RunParameters::default()));
        let before = state.params;
        assert!(!state.start(RunParameters {
            speed: 3.0,
            ..Default::default()
        }));
        assert_eq!(state.params, before);
    }

    #[test]
    fn test_reset_returns_to_initial_state_from_any_phase() {
        let mut state = SimState::new();

        // From Running
        state.start(RunParameters::default());
        state.reset();
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.trajectory(), &[Sample::ORIGIN]);
        assert_eq!(state.pos, Vec2::ZERO);
        assert!(!state.hit_boundary);
        assert!(state.quiz_feedback.is_none());

        // From Stopped
        state.start(RunParameters::default());
        state.phase = RunPhase::Stopped;
        state.elapsed = 5.0;
        state.hit_boundary = true;
        state.reset();
        assert_eq!(state.phase, RunPhase::Idle);
        assert_eq!(state.elapsed, 0.0);
        assert!(!state.hit_boundary);
    }

    #[test]
    fn test_quiz_gated_on_stopped() {
        let mut state = SimState::new();
        assert!(state.submit_answer("10").is_none());

        state.start(RunParameters::default());
        assert!(state.submit_answer("10").is_none());

        state.phase = RunPhase::Stopped;
        state.pos = Vec2::new(100.0, 0.0);
        state.elapsed = 5.0;
        assert!(state.submit_answer("20").is_some());
        assert!(state.quiz_feedback.is_some());
    }
}
