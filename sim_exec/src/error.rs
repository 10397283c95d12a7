//! Errors raised by the simulation library

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A configuration value which makes the simulation impossible to run.
///
/// These are always raised before any simulation step is taken.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Wheelbase must be greater than zero, found {0} m")]
    NonPositiveWheelbase(f64),

    #[error("Lookahead distance must be greater than zero, found {0} m")]
    NonPositiveLookahead(f64),

    #[error("Time step must be greater than zero, found {0} s")]
    NonPositiveTimeStep(f64),

    #[error("Step count must be greater than zero")]
    ZeroStepCount,

    #[error("Maximum steering rate cannot be negative, found {0} rad")]
    NegativeSteerRate(f64),

    #[error("Noise standard deviation cannot be negative, found {0} m")]
    NegativeNoiseStdDev(f64),

    #[error("Path duration cannot be negative, found {0} s")]
    NegativePathDuration(f64),

    #[error("Parameter `{0}` must be finite")]
    NonFinite(&'static str),
}

/// Possible errors that can occur while generating or simulating a run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Non-finite {quantity} produced at step {step}")]
    NumericDomain { step: usize, quantity: &'static str },

    #[error("Cannot build the measurement noise model: {0}")]
    NoiseModel(rand_distr::NormalError),

    #[error("The reference sequence is empty")]
    EmptyReference,

    #[error("Expected {expected} reference samples (step_count) but got {found}")]
    ReferenceLengthMismatch { expected: usize, found: usize },

    #[error("The simulation must be initialised before it is stepped")]
    NotInitialised,
}
