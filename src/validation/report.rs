//! Structured violation records accumulated during a validation pass.

use std::fmt;

/// Which rule family a violation belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ViolationKind {
    /// A top-level section is missing, empty, or the wrong container type.
    Structural,
    /// A required field is absent.
    Presence,
    /// A field (or list element) is present with the wrong JSON type.
    Type,
    /// A correctly typed value breaks a content rule (URL shape, empty list,
    /// unknown category).
    Format,
    /// A tool name repeats an earlier one, ignoring case.
    Uniqueness,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::Structural,
        ViolationKind::Presence,
        ViolationKind::Type,
        ViolationKind::Format,
        ViolationKind::Uniqueness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Structural => "structural",
            ViolationKind::Presence => "presence",
            ViolationKind::Type => "type",
            ViolationKind::Format => "format",
            ViolationKind::Uniqueness => "uniqueness",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of the document a violation points at.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Subject {
    /// The root document (top-level sections).
    Catalog,
    /// A category, by identifier.
    Category(String),
    /// A tool, by display label (its name, or `Tool at index N`).
    Tool(String),
    /// A `tools` element that is not an object.
    ToolIndex(usize),
}

/// One reported rule failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub subject: Subject,
    pub field: Option<String>,
    pub message: String,
}

impl Violation {
    pub fn new(
        kind: ViolationKind,
        subject: Subject,
        field: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            subject,
            field: field.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered list of violations from one pass; empty means the catalog is valid.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn structural(&mut self, message: impl Into<String>) {
        self.push(Violation::new(
            ViolationKind::Structural,
            Subject::Catalog,
            None,
            message,
        ));
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations of the given kind.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    /// Per-kind tally such as `2 presence, 1 format`, omitting kinds with no
    /// violations.
    pub fn summary(&self) -> String {
        ViolationKind::ALL
            .iter()
            .filter_map(|&kind| {
                let count = self.count(kind);
                (count > 0).then(|| format!("{count} {kind}"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Human-readable messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }
}
