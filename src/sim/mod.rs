//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Elapsed time derived from the tick count, never wall clock
//! - No rendering or platform dependencies

pub mod kinematics;
pub mod quiz;
pub mod state;
pub mod tick;

pub use kinematics::{Velocity, velocity_components};
pub use quiz::{QuizFeedback, check_answer, reference_velocity};
pub use state::{RunParameters, RunPhase, Sample, SimState};
pub use tick::tick;
