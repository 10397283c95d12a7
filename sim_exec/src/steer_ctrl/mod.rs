//! # Steering control module
//!
//! Steering control produces the steering angle demand which keeps the
//! vehicle on the reference path. It is split in two stages:
//!
//! 1. A heuristic pursuit law (`SteerCtrl`) turns the bearing to the current
//!    reference sample into a raw steering demand.
//! 2. A rate limiter (`rate_limit`) bounds how far that demand may move away
//!    from the previously applied command within one step.
//!
//! Neither stage holds any memory between steps. The previously applied
//! command is owned by the caller and passed back in each step.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod controller;
mod rate_limiter;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use controller::*;
pub use rate_limiter::*;
