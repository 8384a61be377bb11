//! Gradebook error types.
//!
//! Interactive input errors are recoverable; everything touching the
//! filesystem or the persisted data is surfaced to the caller as-is.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Errors that can occur while recording, persisting, or exporting marks.
#[derive(Debug, Error)]
pub enum GradebookError {
    /// A roll number or mark could not be coerced to a number.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing file exists but is not a JSON array of records.
    #[error("malformed records in {}: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the CSV report failed.
    #[error("failed to write report {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A record with this roll number is already stored.
    #[error("roll number {0} already exists")]
    DuplicateRoll(i64),
}

impl GradebookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GradebookError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GradebookError::InvalidInput(_) | GradebookError::DuplicateRoll(_)
        )
    }
}
