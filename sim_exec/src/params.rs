//! Simulation parameters

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
use crate::{error::ConfigError, vehicle::VehicleState};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for a single simulation run.
///
/// All values are fixed for the duration of a run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SimParams {
    // ---- VEHICLE ----
    /// Distance between the front and rear axles.
    ///
    /// Units: meters
    pub wheelbase_m: f64,

    /// State of the vehicle before the first step.
    pub initial_state: VehicleState,

    // ---- STEERING ----
    /// Scaling distance used by the steering law.
    ///
    /// Units: meters
    pub lookahead_distance_m: f64,

    /// Maximum change in steering angle between two consecutive steps.
    ///
    /// Units: radians
    pub max_steer_rate_rad: f64,

    // ---- SIMULATION ----
    /// Integration time step.
    ///
    /// Units: seconds
    pub time_step_s: f64,

    /// Number of samples in the reference path, and so number of steps.
    pub step_count: usize,

    // ---- REFERENCE PATH ----
    /// Time spanned by the reference path samples.
    ///
    /// Units: seconds
    pub path_duration_s: f64,

    /// Standard deviation of the measurement noise on each axis.
    ///
    /// Units: meters
    pub noise_std_dev_m: f64,

    /// Seed for the measurement noise random source.
    #[serde(default)]
    pub rng_seed: u64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SimParams {
    fn default() -> Self {
        Self {
            wheelbase_m: 2.5,
            initial_state: VehicleState::new(0.0, 0.0, 1.2, 0.0),
            lookahead_distance_m: 1.5,
            max_steer_rate_rad: 0.5,
            time_step_s: 0.1,
            step_count: 600,
            path_duration_s: 60.0,
            noise_std_dev_m: 0.3,
            rng_seed: 0,
        }
    }
}

impl SimParams {
    /// Check that these parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_checks = [
            ("wheelbase_m", self.wheelbase_m),
            ("lookahead_distance_m", self.lookahead_distance_m),
            ("max_steer_rate_rad", self.max_steer_rate_rad),
            ("time_step_s", self.time_step_s),
            ("path_duration_s", self.path_duration_s),
            ("noise_std_dev_m", self.noise_std_dev_m),
            ("initial_state.x_m", self.initial_state.x_m),
            ("initial_state.y_m", self.initial_state.y_m),
            ("initial_state.speed_ms", self.initial_state.speed_ms),
            ("initial_state.heading_rad", self.initial_state.heading_rad),
        ];
        for (name, value) in finite_checks.iter() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(*name));
            }
        }

        if self.wheelbase_m <= 0.0 {
            return Err(ConfigError::NonPositiveWheelbase(self.wheelbase_m));
        }
        if self.lookahead_distance_m <= 0.0 {
            return Err(ConfigError::NonPositiveLookahead(self.lookahead_distance_m));
        }
        if self.time_step_s <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step_s));
        }
        if self.step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        if self.max_steer_rate_rad < 0.0 {
            return Err(ConfigError::NegativeSteerRate(self.max_steer_rate_rad));
        }
        if self.noise_std_dev_m < 0.0 {
            return Err(ConfigError::NegativeNoiseStdDev(self.noise_std_dev_m));
        }
        if self.path_duration_s < 0.0 {
            return Err(ConfigError::NegativePathDuration(self.path_duration_s));
        }

        Ok(())
    }
}
