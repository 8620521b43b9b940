//! Typed records for each dataset table
//!
//! Only the fields the integrity checks read are modelled; every other key in
//! the JSON is ignored. `id` is required everywhere, and so are a sign's
//! `element_id` and `modality_id`; a record without them fails to load.

use serde::Deserialize;

use super::refs::Refs;

/// A row of a dataset table.
pub trait Record {
    /// File stem of the table this record is loaded from.
    const TABLE: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty => $table:literal),+ $(,)?) => {
        $(
            impl Record for $ty {
                const TABLE: &'static str = $table;

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default)]
    pub color_id: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Modality {
    pub id: String,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Color {
    pub id: String,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sign {
    pub id: String,
    pub element_id: String,
    pub modality_id: String,
    #[serde(default)]
    pub default_color_id: Option<String>,
    #[serde(default)]
    pub polarity: Option<String>,
    #[serde(default)]
    pub domicile_candidates: Option<Refs>,
    #[serde(default)]
    pub exaltation_candidates: Option<Refs>,
    #[serde(default)]
    pub detriment_candidates: Option<Refs>,
    #[serde(default)]
    pub fall_candidates: Option<Refs>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct House {
    pub id: String,
    #[serde(default)]
    pub angularity: Option<String>,
    #[serde(default)]
    pub default_sign_hint: Option<Refs>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Body {
    pub id: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub color_id: Option<Refs>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Aspect {
    pub id: String,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Source {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Decan {
    pub id: String,
    #[serde(default)]
    pub sign_id: Option<Refs>,
    #[serde(default)]
    pub ruler_body_ids: Option<Refs>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Degree {
    pub id: String,
    #[serde(default)]
    pub sign_id: Option<Refs>,
    #[serde(default)]
    pub dwad_sign_id: Option<Refs>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Interpretation {
    pub id: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub sign_id: Option<String>,
    #[serde(default)]
    pub house_id: Option<String>,
    #[serde(default)]
    pub planet_id: Option<String>,
    #[serde(default)]
    pub other_planet_id: Option<String>,
    #[serde(default)]
    pub aspect_id: Option<String>,
    #[serde(default)]
    pub degree_note_id: Option<String>,
    #[serde(default)]
    pub decan_id: Option<String>,
    #[serde(default)]
    pub source_ids: Option<Refs>,
    #[serde(default)]
    pub tags: Option<Refs>,
}

impl_record! {
    Element => "elements",
    Modality => "modalities",
    Color => "colors",
    Sign => "signs",
    House => "houses",
    Body => "bodies",
    Aspect => "aspects",
    Tag => "tags",
    Source => "sources",
    Decan => "decans",
    Degree => "degrees",
    Interpretation => "interpretations",
}
