//! Dataset tables: typed records, loading and id lookups
//!
//! Dimension tables (elements, modalities, colors, signs, houses, bodies,
//! aspects, tags, sources) are indexed by id. Fact tables (decans, degrees,
//! interpretations) are only validated against them.

mod index;
mod loader;
mod refs;
mod types;

pub use index::{IdLookup, Indexes, Lookup};
pub use loader::{table_path, Dataset};
pub use refs::{present, Refs};
pub use types::{
    Aspect, Body, Color, Decan, Degree, Element, House, Interpretation, Modality, Record, Sign,
    Source, Tag,
};
