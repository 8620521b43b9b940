//! Integrity violation types

use std::fmt;

/// What kind of rule a violation broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A reference does not resolve to an id in its target table
    Reference,
    /// A value is outside its allowed set
    Value,
}

impl ViolationKind {
    pub fn tag(self) -> &'static str {
        match self {
            ViolationKind::Reference => "REF",
            ViolationKind::Value => "VAL",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Reference => "reference",
            ViolationKind::Value => "value",
        }
    }
}

/// How a violation is rendered as a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageShape {
    /// `[REF] field='value' missing in table for id=record`
    Missing,
    /// `[REF] scope.field 'value' invalid (record)`
    InvalidWithValue,
    /// `[REF] scope.field invalid (record)`
    Invalid,
}

/// One validation pass. Core passes always run; extended ones are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pass {
    SignDimensions,
    SignDignities,
    HouseAngularity,
    DecanSigns,
    DegreeSigns,
    InterpretationRefs,
    ColorRefs,
    TagRefs,
    SourceRefs,
    DecanRulers,
    HouseSignHints,
    InterpretationAnchors,
    Enumerations,
}

impl Pass {
    pub const CORE: [Pass; 6] = [
        Pass::SignDimensions,
        Pass::SignDignities,
        Pass::HouseAngularity,
        Pass::DecanSigns,
        Pass::DegreeSigns,
        Pass::InterpretationRefs,
    ];

    pub const EXTENDED: [Pass; 7] = [
        Pass::ColorRefs,
        Pass::TagRefs,
        Pass::SourceRefs,
        Pass::DecanRulers,
        Pass::HouseSignHints,
        Pass::InterpretationAnchors,
        Pass::Enumerations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::SignDimensions => "sign-dimensions",
            Pass::SignDignities => "sign-dignities",
            Pass::HouseAngularity => "house-angularity",
            Pass::DecanSigns => "decan-signs",
            Pass::DegreeSigns => "degree-signs",
            Pass::InterpretationRefs => "interpretation-refs",
            Pass::ColorRefs => "color-refs",
            Pass::TagRefs => "tag-refs",
            Pass::SourceRefs => "source-refs",
            Pass::DecanRulers => "decan-rulers",
            Pass::HouseSignHints => "house-sign-hints",
            Pass::InterpretationAnchors => "interpretation-anchors",
            Pass::Enumerations => "enumerations",
        }
    }

    pub fn is_extended(self) -> bool {
        Pass::EXTENDED.contains(&self)
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single integrity violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub pass: Pass,
    /// Table or record label the field belongs to (`sign`, `interpretations`, `degrees`, ...)
    pub scope: &'static str,
    pub field: &'static str,
    /// Table the reference should resolve in; `None` for value-domain violations
    pub target: Option<&'static str>,
    pub record_id: String,
    /// Offending value; `None` when the field was absent
    pub value: Option<String>,
    pub shape: MessageShape,
}

impl Violation {
    /// Unresolved reference reported by the generic reference check.
    pub fn missing(
        pass: Pass,
        scope: &'static str,
        field: &'static str,
        target: &'static str,
        record_id: &str,
        value: &str,
    ) -> Self {
        Self {
            kind: ViolationKind::Reference,
            pass,
            scope,
            field,
            target: Some(target),
            record_id: record_id.to_string(),
            value: Some(value.to_string()),
            shape: MessageShape::Missing,
        }
    }

    /// Unresolved reference reported in the per-field `scope.field ... invalid` shape.
    pub fn invalid_reference(
        pass: Pass,
        scope: &'static str,
        field: &'static str,
        target: &'static str,
        record_id: &str,
        value: &str,
        show_value: bool,
    ) -> Self {
        Self {
            kind: ViolationKind::Reference,
            pass,
            scope,
            field,
            target: Some(target),
            record_id: record_id.to_string(),
            value: Some(value.to_string()),
            shape: if show_value {
                MessageShape::InvalidWithValue
            } else {
                MessageShape::Invalid
            },
        }
    }

    /// Value outside its allowed set (or absent where a value is required).
    pub fn invalid_value(
        pass: Pass,
        scope: &'static str,
        field: &'static str,
        record_id: &str,
        value: Option<&str>,
    ) -> Self {
        Self {
            kind: ViolationKind::Value,
            pass,
            scope,
            field,
            target: None,
            record_id: record_id.to_string(),
            value: value.map(String::from),
            shape: MessageShape::Invalid,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind.tag();
        let value = self.value.as_deref().unwrap_or_default();
        match self.shape {
            MessageShape::Missing => write!(
                f,
                "[{}] {}='{}' missing in {} for id={}",
                tag,
                self.field,
                value,
                self.target.unwrap_or(self.scope),
                self.record_id
            ),
            MessageShape::InvalidWithValue => write!(
                f,
                "[{}] {}.{} '{}' invalid ({})",
                tag, self.scope, self.field, value, self.record_id
            ),
            MessageShape::Invalid => write!(
                f,
                "[{}] {}.{} invalid ({})",
                tag, self.scope, self.field, self.record_id
            ),
        }
    }
}

/// Outcome of one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub pass: Pass,
    /// Records the pass examined
    pub checked: usize,
    pub violations: usize,
}

impl PassSummary {
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}
