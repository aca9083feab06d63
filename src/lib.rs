//! Velocity Lab - an interactive 2D velocity teaching simulator
//!
//! Core modules:
//! - `sim`: Deterministic motion simulation (kinematics, tick loop, quiz)
//! - `renderer`: WebGPU position-over-time chart
//! - `settings`: Display preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Fixed tick interval in seconds (20 Hz)
    pub const TICK_DT: f32 = 0.05;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// The simulated region is a 300x300 square centered on the origin
    pub const REGION_SIZE: f32 = 300.0;
    /// Half-extent of the region; positions are clamped to ±this on each axis
    pub const REGION_HALF: f32 = REGION_SIZE / 2.0;

    /// Speed slider range (m/s)
    pub const SPEED_MIN: f32 = 1.0;
    pub const SPEED_MAX: f32 = 20.0;
    /// Launch angle range (degrees)
    pub const ANGLE_MIN: f32 = 0.0;
    pub const ANGLE_MAX: f32 = 359.0;
    /// Run duration range (seconds)
    pub const DURATION_MIN: f32 = 1.0;
    pub const DURATION_MAX: f32 = 10.0;

    /// Quiz answers within this relative tolerance of the reference count as correct
    pub const QUIZ_TOLERANCE: f32 = 0.01;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
