//! # Vehicle module
//!
//! The vehicle is modelled as a single-track (bicycle) kinematic system. The
//! two wheels of each axle are lumped into one wheel on the centreline, the
//! rear wheel fixed and the front wheel steered by the steering angle
//! `delta`. Speed is a fixed part of the state, only the steering angle is
//! commanded.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod model;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use model::*;
pub use state::*;
