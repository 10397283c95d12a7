//! Kinematic bicycle model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use super::VehicleState;
use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// State transition function of a kinematic bicycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VehicleModel {
    wheelbase_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VehicleModel {
    /// Create a new model for a vehicle with the given wheelbase.
    pub fn new(wheelbase_m: f64) -> Result<Self, ConfigError> {
        if !wheelbase_m.is_finite() {
            return Err(ConfigError::NonFinite("wheelbase_m"));
        }
        if wheelbase_m <= 0.0 {
            return Err(ConfigError::NonPositiveWheelbase(wheelbase_m));
        }

        Ok(Self { wheelbase_m })
    }

    /// Advance the state by `dt_s` seconds under the steering angle
    /// `delta_rad`.
    ///
    /// The slip angle `beta` is approximated from half the steering angle's
    /// tangent, i.e. the centre of mass is taken to sit midway along the
    /// wheelbase. The steering angle is not limited here, that is the
    /// responsibility of the caller. Speed is carried through unchanged.
    pub fn step(&self, state: &VehicleState, delta_rad: f64, dt_s: f64) -> VehicleState {
        let beta_rad = (0.5 * delta_rad.tan()).atan();
        let course_rad = state.heading_rad + beta_rad;

        VehicleState {
            x_m: state.x_m + state.speed_ms * course_rad.cos() * dt_s,
            y_m: state.y_m + state.speed_ms * course_rad.sin() * dt_s,
            speed_ms: state.speed_ms,
            heading_rad: state.heading_rad
                + (state.speed_ms / self.wheelbase_m) * beta_rad.sin() * dt_s,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_invalid_wheelbase() {
        assert_eq!(
            VehicleModel::new(0.0),
            Err(ConfigError::NonPositiveWheelbase(0.0))
        );
        assert_eq!(
            VehicleModel::new(-2.5),
            Err(ConfigError::NonPositiveWheelbase(-2.5))
        );
        assert_eq!(
            VehicleModel::new(f64::NAN),
            Err(ConfigError::NonFinite("wheelbase_m"))
        );
    }

    #[test]
    fn test_straight_step() {
        let model = VehicleModel::new(2.5).unwrap();
        let state = VehicleState::new(0.0, 0.0, 1.2, 0.0);

        let next = model.step(&state, 0.0, 0.1);

        assert_eq!(next, VehicleState::new(1.2 * 0.1, 0.0, 1.2, 0.0));
    }

    #[test]
    fn test_turning_step() {
        let model = VehicleModel::new(2.0).unwrap();
        let state = VehicleState::new(1.0, -1.0, 2.0, FRAC_PI_4);
        let delta = 0.3f64;

        let next = model.step(&state, delta, 0.05);

        let beta = (0.5 * delta.tan()).atan();
        assert_eq!(next.x_m, 1.0 + 2.0 * (FRAC_PI_4 + beta).cos() * 0.05);
        assert_eq!(next.y_m, -1.0 + 2.0 * (FRAC_PI_4 + beta).sin() * 0.05);
        assert_eq!(next.heading_rad, FRAC_PI_4 + (2.0 / 2.0) * beta.sin() * 0.05);
        assert_eq!(next.speed_ms, 2.0);

        // Positive steering turns left
        assert!(next.heading_rad > state.heading_rad);
        assert!(model.step(&state, -delta, 0.05).heading_rad < state.heading_rad);
    }

    #[test]
    fn test_step_is_repeatable() {
        let model = VehicleModel::new(2.5).unwrap();
        let state = VehicleState::new(3.2, 0.7, 1.2, -0.4);

        let a = model.step(&state, 0.21, 0.1);
        let b = model.step(&state, 0.21, 0.1);

        assert_eq!(a.x_m.to_bits(), b.x_m.to_bits());
        assert_eq!(a.y_m.to_bits(), b.y_m.to_bits());
        assert_eq!(a.heading_rad.to_bits(), b.heading_rad.to_bits());
    }

    #[test]
    fn test_heading_not_wrapped() {
        let model = VehicleModel::new(1.0).unwrap();
        let mut state = VehicleState::new(0.0, 0.0, 5.0, 0.0);

        for _ in 0..1000 {
            state = model.step(&state, 1.0, 0.1);
        }

        assert!(state.heading_rad > std::f64::consts::TAU);
    }
}
