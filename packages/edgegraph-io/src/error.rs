//! Error types for edgegraph-io

use thiserror::Error;

/// Errors on the record-source boundary: file access, CSV dialect problems,
/// and core projection failures surfaced through the loader.
#[derive(Debug, Error)]
pub enum IoError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV tokenizing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Core projection error (schema mismatch, configuration, ...)
    #[error(transparent)]
    Project(#[from] edgegraph_core::ProjectError),
}

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, IoError>;
