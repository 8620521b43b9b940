//! Property tests for the generic reference check.

use proptest::prelude::*;

use astrodb::dataset::{Lookup, Tag};
use astrodb::integrity::{check_references, IntegrityReport, Pass};
use astrodb::Refs;

fn id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-f]{1,3}").unwrap()
}

fn tags_with_parents() -> impl Strategy<Value = Vec<Tag>> {
    proptest::collection::vec(
        (id(), proptest::option::of(proptest::collection::vec(id(), 0..4))),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(id, parents)| Tag {
                id,
                parent_id: parents.map(Refs::from),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly the referenced ids absent from the target are reported,
    /// in record order then list order.
    #[test]
    fn property_reports_exactly_unresolved_ids(
        tags in tags_with_parents(),
        known in proptest::collection::vec(id(), 0..8),
    ) {
        let targets: Vec<Tag> = known
            .iter()
            .map(|id| Tag { id: id.clone(), parent_id: None })
            .collect();
        let lookup = Lookup::new(&targets);

        let mut report = IntegrityReport::new();
        let checked = check_references(
            Pass::TagRefs,
            &tags,
            "parent_id",
            |t| t.parent_id.as_ref(),
            &lookup,
            "tags",
            &mut report,
        );

        let expected: Vec<(String, String)> = tags
            .iter()
            .flat_map(|t| {
                t.parent_id
                    .iter()
                    .flat_map(|refs| refs.iter())
                    .filter(|p| !known.iter().any(|k| k.as_str() == *p))
                    .map(|p| (t.id.clone(), p.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect();
        let reported: Vec<(String, String)> = report
            .violations
            .iter()
            .map(|v| (v.record_id.clone(), v.value.clone().unwrap_or_default()))
            .collect();

        prop_assert_eq!(checked, tags.len());
        prop_assert_eq!(reported, expected);
        prop_assert!(report
            .violations
            .iter()
            .all(|v| v.to_string().starts_with("[REF] parent_id='")));
    }

    /// PROPERTY: a one-element list and the bare string deserialize alike.
    #[test]
    fn property_single_string_equals_one_element_list(value in "[a-z0-9-]{0,12}") {
        let bare: Refs = serde_json::from_value(serde_json::json!(value)).unwrap();
        let listed: Refs = serde_json::from_value(serde_json::json!([value])).unwrap();
        prop_assert_eq!(bare, listed);
    }
}
