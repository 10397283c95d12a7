//! Simulation results and summary statistics

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::distance;
use serde::Serialize;

// Internal
use super::{StepOutput, StepReport};
use crate::{path_gen::ReferencePoint, vehicle::VehicleState};
use util::maths::rms;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The result of a complete simulation run.
///
/// Element `i` of each sequence belongs to the step taken towards reference
/// sample `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimResult {
    /// Vehicle state at the end of each step.
    pub states: Vec<VehicleState>,

    /// Steering command applied during each step.
    ///
    /// Units: radians
    pub steer_rad: Vec<f64>,

    /// Number of steps in which the rate limiter changed the raw demand.
    pub num_rate_limited: usize,
}

/// Summary statistics of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimSummary {
    pub num_steps: usize,

    pub final_state: VehicleState,

    /// RMS distance between each state and its reference sample.
    ///
    /// Units: meters
    pub rms_position_error_m: f64,

    /// Largest distance between a state and its reference sample.
    ///
    /// Units: meters
    pub max_position_error_m: f64,

    /// Units: radians
    pub max_abs_steer_rad: f64,

    pub num_rate_limited: usize,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
            steer_rad: Vec::with_capacity(capacity),
            num_rate_limited: 0,
        }
    }

    /// Record the output of one step.
    pub fn push(&mut self, output: StepOutput, report: &StepReport) {
        self.states.push(output.state);
        self.steer_rad.push(output.steer_rad);

        if report.rate_limited {
            self.num_rate_limited += 1;
        }
    }

    /// Number of steps in the result.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Summarise the result against the reference it was run over.
    ///
    /// Returns `None` for an empty result. If the reference is shorter than
    /// the result only the overlapping steps contribute to the errors.
    pub fn summary(&self, reference: &[ReferencePoint]) -> Option<SimSummary> {
        let final_state = *self.states.last()?;

        let errors_m: Vec<f64> = self
            .states
            .iter()
            .zip(reference.iter())
            .map(|(s, r)| distance(&s.position2(), r))
            .collect();

        Some(SimSummary {
            num_steps: self.len(),
            final_state,
            rms_position_error_m: rms(&errors_m).unwrap_or(0.0),
            max_position_error_m: errors_m.iter().cloned().fold(0.0, f64::max),
            max_abs_steer_rad: self.steer_rad.iter().map(|d| d.abs()).fold(0.0, f64::max),
            num_rate_limited: self.num_rate_limited,
        })
    }
}
