//! Reference field values
//!
//! Reference fields in the dataset may hold either a single id or a list of
//! ids. Both shapes are accepted at deserialization time and normalised to a
//! list, so the checks only ever see one shape.

use serde::Deserialize;

/// One or more ids stored in a single reference field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct Refs(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Refs {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(id) => Refs(vec![id]),
            OneOrMany::Many(ids) => Refs(ids),
        }
    }
}

impl Refs {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Refs {
    fn from(ids: Vec<String>) -> Self {
        Refs(ids)
    }
}

impl From<&str> for Refs {
    fn from(id: &str) -> Self {
        Refs(vec![id.to_string()])
    }
}

/// Resolve an optional scalar reference: absent and empty are both "no reference".
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
