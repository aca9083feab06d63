//! Velocity decomposition
//!
//! A run's velocity is fixed for its whole lifetime: speed and launch angle
//! are projected onto the axes once at start, never recomputed mid-run.

use serde::{Deserialize, Serialize};

use crate::deg_to_rad;
use super::state::RunParameters;

/// Axis-aligned velocity components in physical space (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    /// Magnitude of the velocity vector
    #[inline]
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

/// Decompose speed and launch angle (degrees) into axis components.
///
/// Pure trigonometric projection; inputs are range-constrained upstream so
/// there are no error conditions.
pub fn velocity_components(params: &RunParameters) -> Velocity {
    let theta = deg_to_rad(params.angle_deg);
    Velocity {
        vx: params.speed * theta.cos(),
        vy: params.speed * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(speed: f32, angle_deg: f32) -> RunParameters {
        RunParameters {
            speed,
            angle_deg,
            duration: 5.0,
        }
    }

    #[test]
    fn test_cardinal_angles() {
        let v = velocity_components(&params(10.0, 0.0));
        assert!((v.vx - 10.0).abs() < 1e-5);
        assert!(v.vy.abs() < 1e-5);

        let v = velocity_components(&params(20.0, 90.0));
        assert!(v.vx.abs() < 1e-5);
        assert!((v.vy - 20.0).abs() < 1e-5);

        let v = velocity_components(&params(5.0, 180.0));
        assert!((v.vx + 5.0).abs() < 1e-5);
        assert!(v.vy.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_angle() {
        let v = velocity_components(&params(10.0, 45.0));
        let expected = 10.0 / std::f32::consts::SQRT_2;
        assert!((v.vx - expected).abs() < 1e-4);
        assert!((v.vy - expected).abs() < 1e-4);
    }

    #[test]
    fn test_magnitude_preserved() {
        for angle in [0.0, 30.0, 137.0, 212.0, 359.0] {
            let v = velocity_components(&params(12.5, angle));
            assert!((v.speed() - 12.5).abs() < 1e-4, "angle {angle}");
        }
    }
}
