//! # Exchange table export
//!
//! Writes the results of a run as CSV tables for downstream visualisation.
//! Every table has a header row and one row per step, in step order, so row
//! `i` of each table belongs to the same step:
//!
//! | File                       | Columns            |
//! |----------------------------|--------------------|
//! | `true_path.csv`            | `X, Y`             |
//! | `noisy_measurements.csv`   | `X, Y`             |
//! | `mpc_estimated_path.csv`   | `X, Y, Theta`      |
//! | `steering_angles.csv`      | `Time, Steering`   |
//!
//! Floats are written with the shortest representation which reads back to
//! the identical double.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::info;
use nalgebra::Point2;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// Internal
use crate::{path_gen::PathSet, sim::SimResult, vehicle::VehicleState};
use util::archive::{ArchiveError, Archived, Archiver};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

pub const TRUE_PATH_FILE: &str = "true_path.csv";
pub const NOISY_MEASUREMENTS_FILE: &str = "noisy_measurements.csv";
pub const ESTIMATED_PATH_FILE: &str = "mpc_estimated_path.csv";
pub const STEERING_FILE: &str = "steering_angles.csv";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The full set of tables for one run, written into a single directory.
pub struct ExchangeTables<'a> {
    out_dir: PathBuf,
    paths: &'a PathSet,
    result: &'a SimResult,
}

#[derive(Serialize)]
struct PointRecord {
    #[serde(rename = "X")]
    x_m: f64,
    #[serde(rename = "Y")]
    y_m: f64,
}

#[derive(Serialize)]
struct PoseRecord {
    #[serde(rename = "X")]
    x_m: f64,
    #[serde(rename = "Y")]
    y_m: f64,
    #[serde(rename = "Theta")]
    heading_rad: f64,
}

#[derive(Serialize)]
struct SteerRecord {
    #[serde(rename = "Time")]
    time_s: f64,
    #[serde(rename = "Steering")]
    steer_rad: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot create the output directory {0:?}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Cannot write table {0}: {1}")]
    Archive(&'static str, ArchiveError),

    #[error(
        "Tables would not be row aligned: {reference} reference, {measurements} measurement \
         and {estimated} estimated rows"
    )]
    RowCountMismatch {
        reference: usize,
        measurements: usize,
        estimated: usize,
    },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<'a> ExchangeTables<'a> {
    /// Prepare the tables for a run, checking that they will be row aligned.
    pub fn new<P: AsRef<Path>>(
        out_dir: P,
        paths: &'a PathSet,
        result: &'a SimResult,
    ) -> Result<Self, ExportError> {
        check_aligned(paths, result)?;

        Ok(Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            paths,
            result,
        })
    }
}

impl<'a> Archived for ExchangeTables<'a> {
    type Error = ExportError;

    fn write(&self) -> Result<(), Self::Error> {
        std::fs::create_dir_all(&self.out_dir)
            .map_err(|e| ExportError::CreateDir(self.out_dir.clone(), e))?;

        let open = |name: &'static str| {
            Archiver::from_path(self.out_dir.join(name)).map_err(|e| ExportError::Archive(name, e))
        };

        write_point_table(open(TRUE_PATH_FILE)?, &self.paths.reference)
            .map_err(|e| ExportError::Archive(TRUE_PATH_FILE, e))?;
        write_point_table(open(NOISY_MEASUREMENTS_FILE)?, &self.paths.measurements)
            .map_err(|e| ExportError::Archive(NOISY_MEASUREMENTS_FILE, e))?;
        write_pose_table(open(ESTIMATED_PATH_FILE)?, &self.result.states)
            .map_err(|e| ExportError::Archive(ESTIMATED_PATH_FILE, e))?;
        write_steer_table(
            open(STEERING_FILE)?,
            &self.paths.times_s,
            &self.result.steer_rad,
        )
        .map_err(|e| ExportError::Archive(STEERING_FILE, e))?;

        info!("Tables written to {:?}", self.out_dir);

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Check the reference, measurement and estimated sequences have equal
/// lengths.
pub fn check_aligned(paths: &PathSet, result: &SimResult) -> Result<(), ExportError> {
    let reference = paths.reference.len();
    let measurements = paths.measurements.len();
    let estimated = result.len();

    if reference != measurements
        || reference != estimated
        || paths.times_s.len() != reference
        || result.steer_rad.len() != estimated
    {
        return Err(ExportError::RowCountMismatch {
            reference,
            measurements,
            estimated,
        });
    }

    Ok(())
}

/// Write a table of `X, Y` rows.
pub fn write_point_table<W: Write>(
    mut arch: Archiver<W>,
    points: &[Point2<f64>],
) -> Result<W, ArchiveError> {
    for p in points {
        arch.serialise(PointRecord { x_m: p.x, y_m: p.y })?;
    }

    arch.into_inner()
}

/// Write a table of `X, Y, Theta` rows, one per state.
pub fn write_pose_table<W: Write>(
    mut arch: Archiver<W>,
    states: &[VehicleState],
) -> Result<W, ArchiveError> {
    for s in states {
        arch.serialise(PoseRecord {
            x_m: s.x_m,
            y_m: s.y_m,
            heading_rad: s.heading_rad,
        })?;
    }

    arch.into_inner()
}

/// Write a table of `Time, Steering` rows.
pub fn write_steer_table<W: Write>(
    mut arch: Archiver<W>,
    times_s: &[f64],
    steer_rad: &[f64],
) -> Result<W, ArchiveError> {
    for (&time_s, &steer_rad) in times_s.iter().zip(steer_rad.iter()) {
        arch.serialise(SteerRecord { time_s, steer_rad })?;
    }

    arch.into_inner()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{params::SimParams, path_gen, sim};
    use rand::{rngs::StdRng, SeedableRng};

    fn read_rows(bytes: Vec<u8>) -> (Vec<String>, Vec<Vec<f64>>) {
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.parse().unwrap()).collect())
            .collect();

        (headers, rows)
    }

    fn small_run() -> (PathSet, SimResult) {
        let params = SimParams {
            step_count: 50,
            path_duration_s: 5.0,
            ..SimParams::default()
        };
        let paths = path_gen::generate(
            params.step_count,
            params.path_duration_s,
            params.noise_std_dev_m,
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        let result = sim::run(&params, &paths.reference).unwrap();

        (paths, result)
    }

    #[test]
    fn test_table_schemas() {
        let (paths, result) = small_run();

        let (headers, rows) = read_rows(
            write_point_table(Archiver::from_writer(Vec::new()), &paths.reference).unwrap(),
        );
        assert_eq!(headers, vec!["X", "Y"]);
        assert_eq!(rows.len(), 50);

        let (headers, rows) = read_rows(
            write_pose_table(Archiver::from_writer(Vec::new()), &result.states).unwrap(),
        );
        assert_eq!(headers, vec!["X", "Y", "Theta"]);
        assert_eq!(rows.len(), 50);

        let (headers, rows) = read_rows(
            write_steer_table(
                Archiver::from_writer(Vec::new()),
                &paths.times_s,
                &result.steer_rad,
            )
            .unwrap(),
        );
        assert_eq!(headers, vec!["Time", "Steering"]);
        assert_eq!(rows.len(), 50);
    }

    #[test]
    fn test_full_precision() {
        let (_, result) = small_run();

        let (_, rows) = read_rows(
            write_pose_table(Archiver::from_writer(Vec::new()), &result.states).unwrap(),
        );

        for (row, state) in rows.iter().zip(result.states.iter()) {
            assert_eq!(row[0].to_bits(), state.x_m.to_bits());
            assert_eq!(row[1].to_bits(), state.y_m.to_bits());
            assert_eq!(row[2].to_bits(), state.heading_rad.to_bits());
        }
    }

    #[test]
    fn test_misaligned_rejected() {
        let (paths, mut result) = small_run();
        result.states.pop();
        result.steer_rad.pop();

        assert!(matches!(
            ExchangeTables::new("unused", &paths, &result),
            Err(ExportError::RowCountMismatch {
                reference: 50,
                measurements: 50,
                estimated: 49
            })
        ));
    }

    #[test]
    fn test_write_to_directory() {
        let (paths, result) = small_run();
        let out_dir = std::env::temp_dir().join(format!("sim_export_{}", std::process::id()));

        let tables = ExchangeTables::new(&out_dir, &paths, &result).unwrap();
        tables.write().unwrap();

        let mut lens = Vec::new();
        for name in [
            TRUE_PATH_FILE,
            NOISY_MEASUREMENTS_FILE,
            ESTIMATED_PATH_FILE,
            STEERING_FILE,
        ]
        .iter()
        {
            let bytes = std::fs::read(out_dir.join(name)).unwrap();
            lens.push(read_rows(bytes).1.len());
        }
        assert_eq!(lens, vec![50; 4]);

        std::fs::remove_dir_all(out_dir).unwrap();
    }
}
