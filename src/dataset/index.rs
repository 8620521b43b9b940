//! Id lookups over loaded tables

use std::collections::HashMap;

use super::loader::Dataset;
use super::types::*;

/// Anything that can answer "does this id exist?".
pub trait IdLookup {
    fn contains_id(&self, id: &str) -> bool;
}

/// id → record mapping for one table. Later duplicates replace earlier ones.
#[derive(Debug, Clone)]
pub struct Lookup<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T: Record> Lookup<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        Self {
            by_id: records.iter().map(|r| (r.id(), r)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<T> IdLookup for Lookup<'_, T> {
    fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

/// Lookups for the nine dimension tables.
#[derive(Debug, Clone)]
pub struct Indexes<'a> {
    pub elements: Lookup<'a, Element>,
    pub modalities: Lookup<'a, Modality>,
    pub colors: Lookup<'a, Color>,
    pub signs: Lookup<'a, Sign>,
    pub houses: Lookup<'a, House>,
    pub bodies: Lookup<'a, Body>,
    pub aspects: Lookup<'a, Aspect>,
    pub tags: Lookup<'a, Tag>,
    pub sources: Lookup<'a, Source>,
}

impl<'a> Indexes<'a> {
    pub fn build(dataset: &'a Dataset) -> Self {
        Self {
            elements: Lookup::new(&dataset.elements),
            modalities: Lookup::new(&dataset.modalities),
            colors: Lookup::new(&dataset.colors),
            signs: Lookup::new(&dataset.signs),
            houses: Lookup::new(&dataset.houses),
            bodies: Lookup::new(&dataset.bodies),
            aspects: Lookup::new(&dataset.aspects),
            tags: Lookup::new(&dataset.tags),
            sources: Lookup::new(&dataset.sources),
        }
    }
}
