//! Heuristic pursuit steering law

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;

use crate::{error::ConfigError, vehicle::VehicleState};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The steering controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SteerCtrl {
    /// Wheelbase of the controlled vehicle
    wheelbase_m: f64,

    /// Scaling distance of the pursuit law
    lookahead_distance_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SteerCtrl {
    /// Create a new controller for a vehicle with the given wheelbase.
    pub fn new(wheelbase_m: f64, lookahead_distance_m: f64) -> Result<Self, ConfigError> {
        if !wheelbase_m.is_finite() {
            return Err(ConfigError::NonFinite("wheelbase_m"));
        }
        if !lookahead_distance_m.is_finite() {
            return Err(ConfigError::NonFinite("lookahead_distance_m"));
        }
        if wheelbase_m <= 0.0 {
            return Err(ConfigError::NonPositiveWheelbase(wheelbase_m));
        }
        if lookahead_distance_m <= 0.0 {
            return Err(ConfigError::NonPositiveLookahead(lookahead_distance_m));
        }

        Ok(Self {
            wheelbase_m,
            lookahead_distance_m,
        })
    }

    /// Compute the raw (unlimited) steering demand which points the vehicle
    /// towards the target.
    ///
    /// The target is the reference sample for the current step, it is not
    /// searched for along the path at the lookahead distance. The lookahead
    /// distance only scales the gain of the law:
    ///
    /// `delta = atan(2 L sin(alpha) / lookahead)`
    ///
    /// where `alpha` is the bearing of the target relative to the heading.
    /// A target coincident with the vehicle has a bearing of zero.
    pub fn compute_raw_command(&self, state: &VehicleState, target: &Point2<f64>) -> f64 {
        let dx_m = target.x - state.x_m;
        let dy_m = target.y - state.y_m;
        let target_angle_rad = dy_m.atan2(dx_m);
        let alpha_rad = target_angle_rad - state.heading_rad;

        (2.0 * self.wheelbase_m * alpha_rad.sin() / self.lookahead_distance_m).atan()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_invalid_params() {
        assert_eq!(
            SteerCtrl::new(2.5, 0.0),
            Err(ConfigError::NonPositiveLookahead(0.0))
        );
        assert_eq!(
            SteerCtrl::new(0.0, 1.5),
            Err(ConfigError::NonPositiveWheelbase(0.0))
        );
        assert_eq!(
            SteerCtrl::new(2.5, f64::INFINITY),
            Err(ConfigError::NonFinite("lookahead_distance_m"))
        );
    }

    #[test]
    fn test_aligned_target() {
        let ctrl = SteerCtrl::new(2.5, 1.5).unwrap();
        let state = VehicleState::new(0.0, 0.0, 1.2, 0.0);

        assert_eq!(ctrl.compute_raw_command(&state, &Point2::new(5.0, 0.0)), 0.0);

        // Target on top of the vehicle
        assert_eq!(ctrl.compute_raw_command(&state, &Point2::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_side_targets() {
        let ctrl = SteerCtrl::new(2.5, 1.5).unwrap();
        let state = VehicleState::new(1.0, 1.0, 1.2, FRAC_PI_2);

        // Vehicle points along +Y, so a target at -X is to the left
        let left = ctrl.compute_raw_command(&state, &Point2::new(0.0, 1.0));
        let right = ctrl.compute_raw_command(&state, &Point2::new(2.0, 1.0));

        let expected = (2.0 * 2.5 / 1.5f64).atan();
        assert!((left - expected).abs() < 1e-12);
        assert!((right + expected).abs() < 1e-12);
    }

    #[test]
    fn test_target_behind() {
        let ctrl = SteerCtrl::new(2.5, 1.5).unwrap();
        let state = VehicleState::new(0.0, 0.0, 1.2, 0.0);

        // Directly behind gives sin(pi) which is close to but not exactly zero
        let delta = ctrl.compute_raw_command(&state, &Point2::new(-3.0, 0.0));
        assert!(delta.abs() < 1e-12);

        // The demand is always within (-pi/2, pi/2)
        let delta = ctrl.compute_raw_command(&state, &Point2::new(-3.0, -0.1));
        assert!(delta.abs() < FRAC_PI_2);
    }

    #[test]
    fn test_lookahead_scales_gain() {
        let state = VehicleState::new(0.0, 0.0, 1.2, 0.0);
        let target = Point2::new(2.0, 0.5);

        let short = SteerCtrl::new(2.5, 1.0).unwrap().compute_raw_command(&state, &target);
        let long = SteerCtrl::new(2.5, 4.0).unwrap().compute_raw_command(&state, &target);

        assert!(short > long);
        assert!(long > 0.0);
    }
}
