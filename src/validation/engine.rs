//! Catalog validation pass.
//!
//! Walks a parsed `data/tools.json` document once and records every problem it
//! can reach. Only a missing `categories` or `tools` section (or a `tools`
//! section that is not a non-empty array) stops the walk; everything else is
//! accumulated so contributors see all issues from a single run.

use crate::validation::report::{Subject, ValidationReport, Violation, ViolationKind};
use crate::validation::schema::{CATEGORY_FIELDS, CheckContext, FieldSpec, Presence, TOOL_FIELDS};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Validate a catalog document and return the violation messages in order.
///
/// An empty list means the document is valid.
pub fn validate(document: &Value) -> Vec<String> {
    check_catalog(document).messages()
}

/// Validate a catalog document and return the structured report.
pub fn check_catalog(document: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(categories) = document.get("categories") else {
        report.structural("Missing 'categories' object");
        return report;
    };
    let declared = check_categories(categories, &mut report);
    let ctx = CheckContext {
        categories: Some(declared.as_slice()),
    };

    let Some(tools) = document.get("tools") else {
        report.structural("Missing 'tools' array");
        return report;
    };
    let Some(tools) = tools.as_array() else {
        report.structural("'tools' must be an array");
        return report;
    };
    if tools.is_empty() {
        report.structural("'tools' array must contain at least one tool");
        return report;
    }

    let mut seen_names = BTreeSet::new();
    for (index, tool) in tools.iter().enumerate() {
        let Some(entry) = tool.as_object() else {
            report.push(Violation::new(
                ViolationKind::Type,
                Subject::ToolIndex(index),
                None,
                format!("Tool at index {index} must be an object"),
            ));
            continue;
        };

        let label = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Tool at index {index}"));
        check_entry(&Owner::Tool(&label), TOOL_FIELDS, entry, &ctx, &mut report);

        // Names that are missing or not strings already produced a field
        // violation above and take no part in duplicate detection.
        if let Some(name) = entry.get("name").and_then(Value::as_str) {
            if !seen_names.insert(name.to_lowercase()) {
                report.push(Violation::new(
                    ViolationKind::Uniqueness,
                    Subject::Tool(label),
                    Some("name"),
                    format!("Duplicate tool name: '{name}'"),
                ));
            }
        }
    }

    report
}

/// Check the `categories` section and return the declared ids in file order.
/// Tool references are checked against them; a section that is not an object
/// declares nothing.
fn check_categories<'a>(categories: &'a Value, report: &mut ValidationReport) -> Vec<&'a str> {
    let Some(declared) = categories.as_object() else {
        report.structural("'categories' must be an object");
        return Vec::new();
    };
    if declared.is_empty() {
        report.structural("'categories' must contain at least one category");
        return Vec::new();
    }

    let ctx = CheckContext::default();
    for (id, category) in declared {
        let Some(entry) = category.as_object() else {
            report.push(Violation::new(
                ViolationKind::Type,
                Subject::Category(id.clone()),
                None,
                format!("Category '{id}' must be an object"),
            ));
            continue;
        };
        check_entry(&Owner::Category(id), CATEGORY_FIELDS, entry, &ctx, report);
    }
    declared.keys().map(String::as_str).collect()
}

/// Entry being checked; decides how field messages are worded.
enum Owner<'a> {
    Category(&'a str),
    Tool(&'a str),
}

impl Owner<'_> {
    fn subject(&self) -> Subject {
        match self {
            Owner::Category(id) => Subject::Category(id.to_string()),
            Owner::Tool(label) => Subject::Tool(label.to_string()),
        }
    }

    fn missing(&self, field: &str) -> String {
        match self {
            Owner::Category(id) => format!("Category '{id}' missing required field: '{field}'"),
            Owner::Tool(label) => format!("[{label}] Missing required field: '{field}'"),
        }
    }

    fn mistyped(&self, field: &str, expected: &str) -> String {
        match self {
            Owner::Category(id) => format!("Category '{id}' field '{field}' must be {expected}"),
            Owner::Tool(label) => format!("[{label}] Field '{field}' must be {expected}"),
        }
    }

    fn content(&self, detail: &str) -> String {
        match self {
            Owner::Category(id) => format!("Category '{id}': {detail}"),
            Owner::Tool(label) => format!("[{label}] {detail}"),
        }
    }
}

/// Run the field table against one entry: required fields' shapes, then
/// their content rules, then the same two passes for optional fields.
fn check_entry(
    owner: &Owner<'_>,
    specs: &[FieldSpec],
    entry: &Map<String, Value>,
    ctx: &CheckContext<'_>,
    report: &mut ValidationReport,
) {
    let group = |presence: Presence| specs.iter().filter(move |spec| spec.presence == presence);

    for presence in [Presence::Required, Presence::Optional] {
        for spec in group(presence) {
            match entry.get(spec.name) {
                None if spec.presence == Presence::Required => report.push(Violation::new(
                    ViolationKind::Presence,
                    owner.subject(),
                    Some(spec.name),
                    owner.missing(spec.name),
                )),
                Some(value) if !spec.shape.matches(value) => report.push(Violation::new(
                    ViolationKind::Type,
                    owner.subject(),
                    Some(spec.name),
                    owner.mistyped(spec.name, spec.shape.describe()),
                )),
                _ => {}
            }
        }

        for spec in group(presence) {
            let Some(check) = spec.check else {
                continue;
            };
            let Some(value) = entry.get(spec.name) else {
                continue;
            };
            if !spec.shape.matches(value) {
                continue;
            }
            if let Some(detail) = check(spec.name, value, ctx) {
                report.push(Violation::new(
                    ViolationKind::Format,
                    owner.subject(),
                    Some(spec.name),
                    owner.content(&detail),
                ));
            }
        }
    }
}
