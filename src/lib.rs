//! astrodb - astrology reference dataset and its integrity checker
//!
//! The dataset is a set of JSON tables (signs, houses, bodies, aspects,
//! interpretations, ...). This crate loads them into typed records and
//! verifies that every cross-table reference resolves and that enumerated
//! fields hold allowed values.

pub mod config;
pub mod dataset;
pub mod error;
pub mod integrity;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LoadedConfig};
pub use dataset::{Dataset, Indexes, Lookup, Refs};
pub use error::{AstroDbError, AstroDbResult};
pub use integrity::{
    run_integrity, run_integrity_with_callback, CheckOptions, IntegrityReport, Pass, Violation,
    ViolationKind,
};
