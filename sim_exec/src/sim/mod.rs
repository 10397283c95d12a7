//! # Simulation module
//!
//! The simulation steps the vehicle along the reference path, one reference
//! sample per step. Each step:
//!
//! 1. Computes the raw steering demand towards the current reference sample.
//! 2. Rate limits it against the command applied on the previous step.
//! 3. Advances the vehicle by one time step under the limited command.
//! 4. Records the new state and the applied command.
//!
//! The vehicle state and the previous command are the only things carried
//! from one step to the next. A run either covers the whole reference
//! sequence or fails, no partial results are returned.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod result;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};
use util::module::State;

// Internal
use crate::{error::SimError, params::SimParams, path_gen::ReferencePoint};
pub use result::*;
pub use state::*;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Run a complete simulation over the reference sequence.
///
/// Exactly `step_count` steps are taken, one per reference sample, so the
/// reference must hold `step_count` samples. The parameters and the
/// reference length are checked before any step is taken.
pub fn run(params: &SimParams, reference: &[ReferencePoint]) -> Result<SimResult, SimError> {
    params.validate()?;

    if reference.is_empty() {
        return Err(SimError::EmptyReference);
    }
    if reference.len() != params.step_count {
        return Err(SimError::ReferenceLengthMismatch {
            expected: params.step_count,
            found: reference.len(),
        });
    }

    let mut sim = TrajSim::default();
    sim.init(params.clone())?;

    debug!("Starting run of {} steps from {:?}", reference.len(), params.initial_state);

    let mut result = SimResult::with_capacity(reference.len());

    for target in reference {
        let (output, report) = sim.proc(target)?;
        result.push(output, &report);
    }

    info!(
        "Run complete: {} steps, {} rate limited",
        result.len(),
        result.num_rate_limited
    );

    Ok(result)
}
