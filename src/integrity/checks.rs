//! Core integrity passes
//!
//! Every pass returns the number of records it examined. Violations go to the
//! sink in table order.

use crate::dataset::{
    present, Decan, Degree, House, IdLookup, Indexes, Interpretation, Record, Refs, Sign,
};

use super::report::IntegritySink;
use super::types::{Pass, Violation};
use super::ANGULARITIES;

/// Generic reference check.
///
/// For each record, reads the field through `value_of`; an absent field is
/// skipped, otherwise every id it holds must exist in `target`. Unresolved ids
/// are reported as `[REF] field='value' missing in table_name for id=...`.
pub fn check_references<R: Record>(
    pass: Pass,
    records: &[R],
    field: &'static str,
    value_of: impl Fn(&R) -> Option<&Refs>,
    target: &impl IdLookup,
    table_name: &'static str,
    sink: &mut impl IntegritySink,
) -> usize {
    for record in records {
        let Some(refs) = value_of(record) else {
            continue;
        };
        for id in refs.iter() {
            if !target.contains_id(id) {
                sink.add_violation(Violation::missing(
                    pass,
                    R::TABLE,
                    field,
                    table_name,
                    record.id(),
                    id,
                ));
            }
        }
    }
    records.len()
}

/// A scalar reference field, its target lookup and the target's label.
pub(super) type ScalarRef<'r> = (&'static str, &'r Option<String>, &'r dyn IdLookup, &'static str);

/// Check scalar optional references of one record, reporting `scope.field invalid (id)`.
pub(super) fn check_scalars(
    pass: Pass,
    scope: &'static str,
    record_id: &str,
    fields: &[ScalarRef<'_>],
    sink: &mut impl IntegritySink,
) {
    for &(field, value, target, target_name) in fields {
        let Some(id) = present(value) else {
            continue;
        };
        if !target.contains_id(id) {
            sink.add_violation(Violation::invalid_reference(
                pass,
                scope,
                field,
                target_name,
                record_id,
                id,
                false,
            ));
        }
    }
}

pub fn check_sign_dimensions(
    signs: &[Sign],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    let pass = Pass::SignDimensions;
    for sign in signs {
        if !idx.elements.contains_id(&sign.element_id) {
            sink.add_violation(Violation::invalid_reference(
                pass,
                "sign",
                "element_id",
                "elements",
                &sign.id,
                &sign.element_id,
                true,
            ));
        }
        if !idx.modalities.contains_id(&sign.modality_id) {
            sink.add_violation(Violation::invalid_reference(
                pass,
                "sign",
                "modality_id",
                "modalities",
                &sign.id,
                &sign.modality_id,
                true,
            ));
        }
        check_scalars(
            pass,
            "sign",
            &sign.id,
            &[("default_color_id", &sign.default_color_id, &idx.colors, "colors")],
            sink,
        );
    }
    signs.len()
}

const DIGNITY_FIELDS: [&str; 4] = [
    "domicile_candidates",
    "exaltation_candidates",
    "detriment_candidates",
    "fall_candidates",
];

fn dignity_candidates<'s>(sign: &'s Sign, field: &str) -> Option<&'s Refs> {
    match field {
        "domicile_candidates" => sign.domicile_candidates.as_ref(),
        "exaltation_candidates" => sign.exaltation_candidates.as_ref(),
        "detriment_candidates" => sign.detriment_candidates.as_ref(),
        "fall_candidates" => sign.fall_candidates.as_ref(),
        _ => None,
    }
}

pub fn check_sign_dignities(
    signs: &[Sign],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    let pass = Pass::SignDignities;
    for sign in signs {
        let one = std::slice::from_ref(sign);
        for field in DIGNITY_FIELDS {
            check_references(
                pass,
                one,
                field,
                |s| dignity_candidates(s, field),
                &idx.bodies,
                "bodies",
                sink,
            );
        }
    }
    signs.len()
}

pub fn check_house_angularity(houses: &[House], sink: &mut impl IntegritySink) -> usize {
    for house in houses {
        let value = house.angularity.as_deref();
        if !value.is_some_and(|v| ANGULARITIES.contains(&v)) {
            sink.add_violation(Violation::invalid_value(
                Pass::HouseAngularity,
                "house",
                "angularity",
                &house.id,
                value,
            ));
        }
    }
    houses.len()
}

pub fn check_decan_signs(
    decans: &[Decan],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    check_references(
        Pass::DecanSigns,
        decans,
        "sign_id",
        |d| d.sign_id.as_ref(),
        &idx.signs,
        "signs",
        sink,
    )
}

/// All `sign_id` violations of the table come before any `dwad_sign_id` one.
pub fn check_degree_signs(
    degrees: &[Degree],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    check_references(
        Pass::DegreeSigns,
        degrees,
        "sign_id",
        |d| d.sign_id.as_ref(),
        &idx.signs,
        "signs",
        sink,
    );
    check_references(
        Pass::DegreeSigns,
        degrees,
        "dwad_sign_id",
        |d| d.dwad_sign_id.as_ref(),
        &idx.signs,
        "signs",
        sink,
    )
}

pub fn check_interpretation_refs(
    interpretations: &[Interpretation],
    idx: &Indexes<'_>,
    sink: &mut impl IntegritySink,
) -> usize {
    for it in interpretations {
        check_scalars(
            Pass::InterpretationRefs,
            Interpretation::TABLE,
            &it.id,
            &[
                ("sign_id", &it.sign_id, &idx.signs, "signs"),
                ("house_id", &it.house_id, &idx.houses, "houses"),
                ("planet_id", &it.planet_id, &idx.bodies, "bodies"),
                ("other_planet_id", &it.other_planet_id, &idx.bodies, "bodies"),
                ("aspect_id", &it.aspect_id, &idx.aspects, "aspects"),
            ],
            sink,
        );
    }
    interpretations.len()
}
