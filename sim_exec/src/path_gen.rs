//! # Path generation
//!
//! Produces the reference path the vehicle is asked to follow, and a stream
//! of noisy position measurements of that path.
//!
//! The reference is the curve `x(t) = t`, `y(t) = sin(t)` sampled at evenly
//! spaced times over `[0, duration]`, both ends included. Measurements add
//! independent zero-mean Gaussian noise to each axis of each sample.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, warn};
use nalgebra::Point2;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

// Internal
use crate::error::{ConfigError, SimError};
use util::maths::lin_space;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A sample of the intended path. The index of the sample is the step it
/// belongs to.
pub type ReferencePoint = Point2<f64>;

/// A noisy measurement of a reference sample.
pub type MeasurementPoint = Point2<f64>;

/// The reference path and its measurements, index aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSet {
    /// Sample times of the reference points.
    ///
    /// Units: seconds
    pub times_s: Vec<f64>,

    /// The reference path.
    pub reference: Vec<ReferencePoint>,

    /// The noisy measurements of the reference path.
    pub measurements: Vec<MeasurementPoint>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PathSet {
    /// Number of samples in the set.
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Position on the reference curve at time `t_s`.
pub fn reference_at(t_s: f64) -> ReferencePoint {
    Point2::new(t_s, t_s.sin())
}

/// Generate the reference path and measurements.
///
/// All noise on the X axis is drawn from `rng` first, followed by all noise on
/// the Y axis, so a given random source state always produces the same
/// measurements.
pub fn generate<R>(
    step_count: usize,
    duration_s: f64,
    noise_std_dev_m: f64,
    rng: &mut R,
) -> Result<PathSet, SimError>
where
    R: Rng + ?Sized,
{
    if step_count == 0 {
        return Err(ConfigError::ZeroStepCount.into());
    }
    if !duration_s.is_finite() {
        return Err(ConfigError::NonFinite("path_duration_s").into());
    }
    if duration_s < 0.0 {
        return Err(ConfigError::NegativePathDuration(duration_s).into());
    }
    if !noise_std_dev_m.is_finite() {
        return Err(ConfigError::NonFinite("noise_std_dev_m").into());
    }
    if noise_std_dev_m < 0.0 {
        return Err(ConfigError::NegativeNoiseStdDev(noise_std_dev_m).into());
    }
    if noise_std_dev_m == 0.0 {
        warn!("Measurement noise is zero, measurements will equal the reference");
    }

    let noise = Normal::new(0.0, noise_std_dev_m).map_err(SimError::NoiseModel)?;

    let times_s = lin_space(0.0, duration_s, step_count);
    let reference: Vec<ReferencePoint> = times_s.iter().map(|&t| reference_at(t)).collect();

    let noise_x: Vec<f64> = (0..step_count).map(|_| noise.sample(&mut *rng)).collect();
    let noise_y: Vec<f64> = (0..step_count).map(|_| noise.sample(&mut *rng)).collect();

    let measurements = reference
        .iter()
        .zip(noise_x.iter().zip(noise_y.iter()))
        .map(|(p, (nx, ny))| Point2::new(p.x + nx, p.y + ny))
        .collect();

    debug!(
        "Generated {} reference samples over {:.3} s (noise std dev {} m)",
        step_count, duration_s, noise_std_dev_m
    );

    Ok(PathSet {
        times_s,
        reference,
        measurements,
    })
}
