//! Extended integrity passes
//!
//! Cover the remaining cross-table fields of the dataset (colors, tags,
//! sources, decan rulers, house sign hints, interpretation anchors) and the
//! enumerated fields other than house angularity. Enumerated fields are only checked when present.

use crate::dataset::{Dataset, Decan, House, Indexes, Interpretation, Lookup, Record};

use super::checks::{check_references, check_scalars};
use super::report::IntegritySink;
use super::types::{Pass, Violation};
use super::{
    ASPECT_FAMILIES, ASPECT_NATURES, BODY_KINDS, CONFIDENCE_LEVELS, INTERPRETATION_SCOPES,
    INTERPRETATION_TOPICS, POLARITIES,
};

/// Generic reference check of `$field` on every record of `$records`.
macro_rules! check_field {
    ($sink:expr, $pass:expr, $records:expr, $field:ident => $target:expr, $name:literal) => {
        check_references(
            $pass,
            $records,
            stringify!($field),
            |r| r.$field.as_ref(),
            $target,
            $name,
            $sink,
        )
    };
}

pub fn check_color_refs(
    dataset: &Dataset,
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    let pass = Pass::ColorRefs;
    let colors = &idx.colors;
    check_field!(sink, pass, &dataset.elements, color_id => colors, "colors")
        + check_field!(sink, pass, &dataset.bodies, color_id => colors, "colors")
}

/// `tags` on every tagged table, then the tag hierarchy itself.
pub fn check_tag_refs(dataset: &Dataset, idx: &Indexes<'_>, sink: &mut impl IntegritySink) -> usize {
    let pass = Pass::TagRefs;
    let tags = &idx.tags;
    let d = dataset;
    check_field!(sink, pass, &d.elements, tags => tags, "tags")
        + check_field!(sink, pass, &d.modalities, tags => tags, "tags")
        + check_field!(sink, pass, &d.colors, tags => tags, "tags")
        + check_field!(sink, pass, &d.signs, tags => tags, "tags")
        + check_field!(sink, pass, &d.houses, tags => tags, "tags")
        + check_field!(sink, pass, &d.bodies, tags => tags, "tags")
        + check_field!(sink, pass, &d.aspects, tags => tags, "tags")
        + check_field!(sink, pass, &d.degrees, tags => tags, "tags")
        + check_field!(sink, pass, &d.interpretations, tags => tags, "tags")
        + check_field!(sink, pass, &d.tags, parent_id => tags, "tags")
}

pub fn check_source_refs(
    dataset: &Dataset,
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    let pass = Pass::SourceRefs;
    let sources = &idx.sources;
    let d = dataset;
    check_field!(sink, pass, &d.signs, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.houses, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.bodies, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.aspects, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.decans, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.degrees, source_ids => sources, "sources")
        + check_field!(sink, pass, &d.interpretations, source_ids => sources, "sources")
}

pub fn check_decan_rulers(
    decans: &[Decan],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    check_references(
        Pass::DecanRulers,
        decans,
        "ruler_body_ids",
        |d| d.ruler_body_ids.as_ref(),
        &idx.bodies,
        "bodies",
        sink,
    )
}

pub fn check_house_sign_hints(
    houses: &[House],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    check_references(
        Pass::HouseSignHints,
        houses,
        "default_sign_hint",
        |h| h.default_sign_hint.as_ref(),
        &idx.signs,
        "signs",
        sink,
    )
}

/// `degree_note_id` and `decan_id` resolve against the degrees and decans tables.
pub fn check_interpretation_anchors(dataset: &Dataset, sink: &mut impl IntegritySink) -> usize {
    let degrees = Lookup::new(&dataset.degrees);
    let decans = Lookup::new(&dataset.decans);
    for it in &dataset.interpretations {
        check_scalars(
            Pass::InterpretationAnchors,
            Interpretation::TABLE,
            &it.id,
            &[
                ("degree_note_id", &it.degree_note_id, &degrees, "degrees"),
                ("decan_id", &it.decan_id, &decans, "decans"),
            ],
            sink,
        );
    }
    dataset.interpretations.len()
}

fn check_enum(
    scope: &'static str,
    field: &'static str,
    record_id: &str,
    value: &Option<String>,
    allowed: &[&str],
    sink: &mut impl IntegritySink,
) {
    if let Some(v) = value.as_deref() {
        if !allowed.contains(&v) {
            sink.add_violation(Violation::invalid_value(
                Pass::Enumerations,
                scope,
                field,
                record_id,
                Some(v),
            ));
        }
    }
}

pub fn check_enumerations(dataset: &Dataset, sink: &mut impl IntegritySink) -> usize {
    for sign in &dataset.signs {
        check_enum("sign", "polarity", &sign.id, &sign.polarity, POLARITIES, sink);
    }
    for body in &dataset.bodies {
        check_enum("body", "kind", &body.id, &body.kind, BODY_KINDS, sink);
    }
    for aspect in &dataset.aspects {
        check_enum("aspect", "family", &aspect.id, &aspect.family, ASPECT_FAMILIES, sink);
        check_enum("aspect", "nature", &aspect.id, &aspect.nature, ASPECT_NATURES, sink);
    }
    let scope = Interpretation::TABLE;
    for it in &dataset.interpretations {
        check_enum(scope, "scope", &it.id, &it.scope, INTERPRETATION_SCOPES, sink);
        check_enum(scope, "topic", &it.id, &it.topic, INTERPRETATION_TOPICS, sink);
        check_enum(scope, "confidence", &it.id, &it.confidence, CONFIDENCE_LEVELS, sink);
    }
    dataset.signs.len()
        + dataset.bodies.len()
        + dataset.aspects.len()
        + dataset.interpretations.len()
}
