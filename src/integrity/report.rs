//! Integrity report and entry functions

use crate::dataset::{Dataset, Indexes};

use super::checks;
use super::extended;
use super::types::{Pass, PassSummary, Violation, ViolationKind};

/// Which passes to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Run the extended passes after the core ones
    pub extended: bool,
}

pub trait IntegritySink {
    fn add_violation(&mut self, violation: Violation);

    fn complete_pass(&mut self, summary: PassSummary);
}

/// Integrity check results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub violations: Vec<Violation>,
    pub passes: Vec<PassSummary>,
}

impl IntegrityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn references(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Reference)
            .count()
    }

    pub fn values(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Value)
            .count()
    }

    pub fn summary(&self, pass: Pass) -> Option<&PassSummary> {
        self.passes.iter().find(|s| s.pass == pass)
    }

    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }
}

impl IntegritySink for IntegrityReport {
    fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn complete_pass(&mut self, summary: PassSummary) {
        self.passes.push(summary);
    }
}

/// Run every selected pass over the dataset
pub fn run_integrity(dataset: &Dataset, options: CheckOptions) -> IntegrityReport {
    let mut report = IntegrityReport::new();
    run_integrity_into(dataset, options, &mut report);
    report
}

/// Like [`run_integrity`], calling `on_violation` as each violation is discovered.
pub fn run_integrity_with_callback(
    dataset: &Dataset,
    options: CheckOptions,
    on_violation: impl FnMut(&Violation),
) -> IntegrityReport {
    struct CallbackSink<F> {
        report: IntegrityReport,
        on_violation: F,
    }

    impl<F: FnMut(&Violation)> IntegritySink for CallbackSink<F> {
        fn add_violation(&mut self, violation: Violation) {
            (self.on_violation)(&violation);
            self.report.add_violation(violation);
        }

        fn complete_pass(&mut self, summary: PassSummary) {
            self.report.complete_pass(summary);
        }
    }

    let mut sink = CallbackSink {
        report: IntegrityReport::new(),
        on_violation,
    };
    run_integrity_into(dataset, options, &mut sink);
    sink.report
}

/// Counts violations flowing through to the inner sink during one pass.
struct PassCounter<'s, S> {
    inner: &'s mut S,
    violations: usize,
}

impl<S: IntegritySink> IntegritySink for PassCounter<'_, S> {
    fn add_violation(&mut self, violation: Violation) {
        self.violations += 1;
        self.inner.add_violation(violation);
    }

    fn complete_pass(&mut self, summary: PassSummary) {
        self.inner.complete_pass(summary);
    }
}

fn run_pass<S: IntegritySink>(
    sink: &mut S,
    pass: Pass,
    check: impl FnOnce(&mut PassCounter<'_, S>) -> usize,
) {
    let mut counter = PassCounter {
        inner: sink,
        violations: 0,
    };
    let checked = check(&mut counter);
    let summary = PassSummary {
        pass,
        checked,
        violations: counter.violations,
    };
    sink.complete_pass(summary);
}

pub fn run_integrity_into(dataset: &Dataset, options: CheckOptions, sink: &mut impl IntegritySink) {
    let idx = Indexes::build(dataset);

    run_pass(sink, Pass::SignDimensions, |s| {
        checks::check_sign_dimensions(&dataset.signs, &idx, s)
    });
    run_pass(sink, Pass::SignDignities, |s| {
        checks::check_sign_dignities(&dataset.signs, &idx, s)
    });
    run_pass(sink, Pass::HouseAngularity, |s| {
        checks::check_house_angularity(&dataset.houses, s)
    });
    run_pass(sink, Pass::DecanSigns, |s| {
        checks::check_decan_signs(&dataset.decans, &idx, s)
    });
    run_pass(sink, Pass::DegreeSigns, |s| {
        checks::check_degree_signs(&dataset.degrees, &idx, s)
    });
    run_pass(sink, Pass::InterpretationRefs, |s| {
        checks::check_interpretation_refs(&dataset.interpretations, &idx, s)
    });

    if !options.extended {
        return;
    }

    run_pass(sink, Pass::ColorRefs, |s| {
        extended::check_color_refs(dataset, &idx, s)
    });
    run_pass(sink, Pass::TagRefs, |s| extended::check_tag_refs(dataset, &idx, s));
    run_pass(sink, Pass::SourceRefs, |s| {
        extended::check_source_refs(dataset, &idx, s)
    });
    run_pass(sink, Pass::DecanRulers, |s| {
        extended::check_decan_rulers(&dataset.decans, &idx, s)
    });
    run_pass(sink, Pass::HouseSignHints, |s| {
        extended::check_house_sign_hints(&dataset.houses, &idx, s)
    });
    run_pass(sink, Pass::InterpretationAnchors, |s| {
        extended::check_interpretation_anchors(dataset, s)
    });
    run_pass(sink, Pass::Enumerations, |s| {
        extended::check_enumerations(dataset, s)
    });
}
