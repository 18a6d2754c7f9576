//! Error types for ft-output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when writing ranking output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot move finished output into place at {path}: {source}")]
    Persist {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
