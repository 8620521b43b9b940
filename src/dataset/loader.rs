//! Loading the dataset tables from a data directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{AstroDbError, AstroDbResult};

use super::types::*;

/// Every table of the dataset, fully loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub elements: Vec<Element>,
    pub modalities: Vec<Modality>,
    pub colors: Vec<Color>,
    pub signs: Vec<Sign>,
    pub houses: Vec<House>,
    pub bodies: Vec<Body>,
    pub aspects: Vec<Aspect>,
    pub tags: Vec<Tag>,
    pub sources: Vec<Source>,
    pub decans: Vec<Decan>,
    pub degrees: Vec<Degree>,
    pub interpretations: Vec<Interpretation>,
}

impl Dataset {
    /// Load all tables from `dir`, stopping at the first missing or malformed file.
    pub fn load(dir: &Path) -> AstroDbResult<Self> {
        if !dir.is_dir() {
            return Err(AstroDbError::DataDirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        Ok(Self {
            elements: load_table(dir)?,
            modalities: load_table(dir)?,
            colors: load_table(dir)?,
            signs: load_table(dir)?,
            houses: load_table(dir)?,
            bodies: load_table(dir)?,
            aspects: load_table(dir)?,
            tags: load_table(dir)?,
            sources: load_table(dir)?,
            decans: load_table(dir)?,
            degrees: load_table(dir)?,
            interpretations: load_table(dir)?,
        })
    }

    /// `(table, record count)` in load order.
    pub fn table_sizes(&self) -> Vec<(&'static str, usize)> {
        vec![
            (Element::TABLE, self.elements.len()),
            (Modality::TABLE, self.modalities.len()),
            (Color::TABLE, self.colors.len()),
            (Sign::TABLE, self.signs.len()),
            (House::TABLE, self.houses.len()),
            (Body::TABLE, self.bodies.len()),
            (Aspect::TABLE, self.aspects.len()),
            (Tag::TABLE, self.tags.len()),
            (Source::TABLE, self.sources.len()),
            (Decan::TABLE, self.decans.len()),
            (Degree::TABLE, self.degrees.len()),
            (Interpretation::TABLE, self.interpretations.len()),
        ]
    }
}

/// Path of a table file inside the data directory.
pub fn table_path(dir: &Path, table: &str) -> PathBuf {
    dir.join(format!("{}.json", table))
}

fn load_table<T: Record + DeserializeOwned>(dir: &Path) -> AstroDbResult<Vec<T>> {
    let path = table_path(dir, T::TABLE);
    let content = fs::read_to_string(&path).map_err(|source| AstroDbError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AstroDbError::Json { path, source })
}
