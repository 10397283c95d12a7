//! # Trajectory simulation library.
//!
//! Simulates a ground vehicle following a reference path under a heuristic
//! steering controller, producing the reference, noisy measurement and
//! estimated paths for visualisation.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Errors raised by the library
pub mod error;

/// Exchange tables - writes the run's paths as CSV for visualisation tools
pub mod export;

/// Simulation parameters
pub mod params;

/// Path generation - the reference path and noisy measurements of it
pub mod path_gen;

/// Simulation - steps the vehicle along the reference path
pub mod sim;

/// Steering control - computes and rate limits steering demands
pub mod steer_ctrl;

/// Vehicle - the kinematic bicycle model and its state
pub mod vehicle;
