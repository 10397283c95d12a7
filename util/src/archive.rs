//! Tabular archiving functionality
//!
//! Archives are CSV files with a header row followed by one row per
//! serialised record. To give a type the ability to dump all of its tables at
//! once implement the `Archived` trait.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use csv::WriterBuilder;
pub use csv::Writer;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An object used to write CSV archive files.
pub struct Archiver<W: Write = File> {
    writer: Writer<W>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while archiving.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Cannot create the archive file: {0}")]
    CreateError(std::io::Error),

    #[error("Cannot serialise a record: {0}")]
    SerialiseError(csv::Error),

    #[error("Cannot recover the archive's inner writer: {0}")]
    IntoInnerError(String),
}

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A trait which enables a struct to be archived as one or more csv tables.
pub trait Archived {
    /// Error raised while writing the archives.
    type Error;

    /// Write the archives for this struct
    fn write(&self) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Archiver<File> {
    /// Create a new archiver writing to the given path.
    ///
    /// Any existing file at the path is truncated.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let file = File::create(path).map_err(ArchiveError::CreateError)?;

        Ok(Self::from_writer(file))
    }
}

impl<W: Write> Archiver<W> {
    /// Create a new archiver writing into any writer.
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new().has_headers(true).from_writer(writer),
        }
    }

    /// Serialise a record into the archive.
    ///
    /// The header row is derived from the first record's field names.
    pub fn serialise<T: Serialize>(&mut self, record: T) -> Result<(), ArchiveError> {
        self.writer
            .serialize(record)
            .map_err(ArchiveError::SerialiseError)
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, ArchiveError> {
        self.writer
            .into_inner()
            .map_err(|e| ArchiveError::IntoInnerError(e.error().to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        #[serde(rename = "Time")]
        time_s: f64,
        #[serde(rename = "Value")]
        value: f64,
    }

    #[test]
    fn test_archive_to_memory() {
        let mut arch = Archiver::from_writer(Vec::new());
        arch.serialise(Sample {
            time_s: 0.0,
            value: 1.5,
        })
        .unwrap();
        arch.serialise(Sample {
            time_s: 0.1,
            value: -2.0,
        })
        .unwrap();
        let bytes = arch.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["Time,Value", "0.0,1.5", "0.1,-2.0"]);
    }
}
