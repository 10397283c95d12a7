//! Vehicle state definition

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The continuous state of the vehicle in the world frame.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position along the world X axis.
    ///
    /// Units: meters
    pub x_m: f64,

    /// Position along the world Y axis.
    ///
    /// Units: meters
    pub y_m: f64,

    /// Forward speed.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Heading, the angle to the positive X axis. Not wrapped, so a vehicle
    /// which has turned twice around reports a heading near `4 * pi`.
    ///
    /// Units: radians
    pub heading_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VehicleState {
    pub fn new(x_m: f64, y_m: f64, speed_ms: f64, heading_rad: f64) -> Self {
        Self {
            x_m,
            y_m,
            speed_ms,
            heading_rad,
        }
    }

    /// Position of the vehicle as a point.
    pub fn position2(&self) -> Point2<f64> {
        Point2::new(self.x_m, self.y_m)
    }

    /// Returns true if every element of the state is finite.
    pub fn is_finite(&self) -> bool {
        self.x_m.is_finite()
            && self.y_m.is_finite()
            && self.speed_ms.is_finite()
            && self.heading_rad.is_finite()
    }
}
