//! Referential integrity and value-domain checks over the dataset
//!
//! Core passes, always run in this order:
//! - sign element / modality / default color
//! - sign dignity candidates against bodies
//! - house angularity
//! - decan signs
//! - degree signs and dwad signs
//! - interpretation anchors against signs, houses, bodies, aspects
//!
//! Extended passes (opt-in) follow them. Every pass runs regardless of
//! earlier failures; violations are collected, never raised.

mod checks;
mod extended;
mod report;
mod types;

pub use checks::check_references;
pub use report::{
    run_integrity, run_integrity_into, run_integrity_with_callback, CheckOptions,
    IntegrityReport, IntegritySink,
};
pub use types::{MessageShape, Pass, PassSummary, Violation, ViolationKind};

pub(crate) const ANGULARITIES: &[&str] = &["angular", "succedent", "cadent"];

pub(crate) const POLARITIES: &[&str] = &["yin", "yang"];

pub(crate) const BODY_KINDS: &[&str] = &["luminary", "planet", "asteroid", "point", "hypothetical"];

pub(crate) const ASPECT_FAMILIES: &[&str] = &["major", "minor", "harmonic", "other"];

pub(crate) const ASPECT_NATURES: &[&str] = &["soft", "hard", "neutral"];

pub(crate) const INTERPRETATION_SCOPES: &[&str] = &["natal", "transit", "synastry", "composite"];

pub(crate) const INTERPRETATION_TOPICS: &[&str] = &[
    "planet-in-sign",
    "planet-in-house",
    "house-cusp-in-sign",
    "aspect-between-bodies",
    "sign-profile",
    "house-profile",
    "degree-symbol",
    "decans-profile",
];

pub(crate) const CONFIDENCE_LEVELS: &[&str] = &["low", "medium", "high"];
