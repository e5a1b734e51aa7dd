//! Error types for register case generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that end a generator run
#[derive(Debug, Error)]
pub enum GenError {
    /// Register database could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was opened
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Document is not valid JSON or a record lacks `name` / `map.at`
    #[error("invalid register database: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Output file could not be created
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generated code could not be written out
    #[error("failed to write output: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },
}
