//! Property tests over the bundled dataset with random corruption.

use std::path::Path;

use proptest::prelude::*;

use astrodb::integrity::{run_integrity, CheckOptions, Pass};
use astrodb::{Dataset, Refs};

fn bundled() -> Dataset {
    Dataset::load(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: each dwad replaced by an unknown sign yields exactly one
    /// degree-signs violation, and re-running gives the same report.
    #[test]
    fn property_corrupted_dwads_are_each_reported_once(
        picks in proptest::collection::btree_set(0usize..24, 0..6),
        extended in any::<bool>(),
    ) {
        let mut dataset = bundled();
        for &i in &picks {
            let degree = &mut dataset.degrees[i];
            degree.dwad_sign_id = Some(Refs::from(format!("not-a-sign-{}", i).as_str()));
        }
        let options = CheckOptions { extended };

        let report = run_integrity(&dataset, options);
        let again = run_integrity(&dataset, options);

        prop_assert_eq!(report.violations.len(), picks.len());
        prop_assert!(report.violations.iter().all(|v| v.pass == Pass::DegreeSigns));
        prop_assert_eq!(report.passes.len(), if extended { 13 } else { 6 });
        prop_assert_eq!(&report, &again);
    }
}
