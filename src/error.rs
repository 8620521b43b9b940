//! Error types for astrodb
//!
//! Uses `thiserror` for library errors. Integrity violations are not errors:
//! they are collected in an [`IntegrityReport`](crate::integrity::IntegrityReport).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for astrodb operations
pub type AstroDbResult<T> = Result<T, AstroDbError>;

/// Main error type for astrodb operations
#[derive(Error, Debug)]
pub enum AstroDbError {
    /// Data directory does not exist or is not a directory
    #[error("data directory not found: {path}")]
    DataDirectoryNotFound { path: PathBuf },

    /// A table file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table file is not a JSON array of records, or a record lacks a required field
    #[error("invalid table {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl AstroDbError {
    /// File the error refers to, if any.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AstroDbError::DataDirectoryNotFound { path }
            | AstroDbError::Io { path, .. }
            | AstroDbError::Json { path, .. } => path,
            AstroDbError::InvalidConfig { file, .. } => file,
        }
    }
}
