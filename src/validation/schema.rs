//! Declarative field tables for categories and tools.
//!
//! Each entry names a field, whether it must be present, the JSON shape it
//! must have, and an optional content rule that only runs once the field is
//! present with the right shape. The engine walks these tables; adding a
//! field means adding a row here rather than another branch in the engine.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://\S+$").expect("URL pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    Required,
    Optional,
}

/// JSON shape a field value must have.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    String,
    Integer,
    Array,
    /// `donations`: a legacy link string, a platform object, or null.
    Donations,
}

impl Shape {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::String => value.is_string(),
            Shape::Integer => value.is_i64() || value.is_u64(),
            Shape::Array => value.is_array(),
            Shape::Donations => matches!(value, Value::String(_) | Value::Object(_) | Value::Null),
        }
    }

    /// Wording used in "must be ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Integer => "integer",
            Shape::Array => "array",
            Shape::Donations => "a string, object, or null",
        }
    }
}

/// Facts established before per-entry checks run.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckContext<'a> {
    /// Declared category ids in file order, or `None` while the categories
    /// themselves are being checked. A `categories` section that is not an
    /// object establishes an empty set.
    pub categories: Option<&'a [&'a str]>,
}

/// Content rule: receives the field name and its (correctly shaped) value and
/// returns a message body when the rule fails.
pub type ContentCheck = fn(&str, &Value, &CheckContext<'_>) -> Option<String>;

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub shape: Shape,
    pub check: Option<ContentCheck>,
}

impl FieldSpec {
    const fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            presence: Presence::Required,
            shape,
            check: None,
        }
    }

    const fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            shape,
            check: None,
        }
    }

    const fn with_check(mut self, check: ContentCheck) -> Self {
        self.check = Some(check);
        self
    }
}

pub const CATEGORY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", Shape::String),
    FieldSpec::optional("description", Shape::String),
    FieldSpec::optional("order", Shape::Integer),
];

pub const TOOL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", Shape::String),
    FieldSpec::required("author", Shape::String),
    FieldSpec::required("repo", Shape::String).with_check(check_url),
    FieldSpec::required("demo", Shape::String).with_check(check_url),
    FieldSpec::required("description", Shape::String),
    FieldSpec::required("keywords", Shape::Array).with_check(check_keywords),
    FieldSpec::required("category", Shape::String).with_check(check_category),
    FieldSpec::optional("donations", Shape::Donations),
    FieldSpec::optional("browserFeatures", Shape::Array).with_check(check_browser_features),
    FieldSpec::optional("license", Shape::String),
];

/// True when `url` is an absolute http(s) URL with no whitespace.
fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}

fn check_url(field: &str, value: &Value, _: &CheckContext<'_>) -> Option<String> {
    let url = value.as_str()?;
    if is_valid_url(url) {
        None
    } else {
        Some(format!("Invalid URL format for '{field}': {url}"))
    }
}

fn check_category(_: &str, value: &Value, ctx: &CheckContext<'_>) -> Option<String> {
    let categories = ctx.categories?;
    let category = value.as_str()?;
    if categories.contains(&category) {
        return None;
    }
    let known = categories.join(", ");
    Some(format!("Invalid category '{category}'. Must be one of: {known}"))
}

fn check_keywords(_: &str, value: &Value, _: &CheckContext<'_>) -> Option<String> {
    let keywords = value.as_array()?;
    if keywords.is_empty() {
        return Some("Keywords must contain at least one entry".to_string());
    }
    if keywords.iter().any(|kw| !kw.is_string()) {
        return Some("All keywords must be strings".to_string());
    }
    None
}

fn check_browser_features(_: &str, value: &Value, _: &CheckContext<'_>) -> Option<String> {
    let features = value.as_array()?;
    if features.iter().any(|feat| !feat.is_string()) {
        return Some("All browserFeatures must be strings".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_pattern_requires_scheme_and_body() {
        assert!(is_valid_url("https://github.com/a/x"));
        assert!(is_valid_url("http://example.org"));
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("ftp://example.org"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://exa mple.org"));
        assert!(!is_valid_url("github.com/a/x"));
    }

    #[test]
    fn integer_shape_rejects_bools_and_floats() {
        assert!(Shape::Integer.matches(&json!(3)));
        assert!(Shape::Integer.matches(&json!(-1)));
        assert!(!Shape::Integer.matches(&json!(true)));
        assert!(!Shape::Integer.matches(&json!(1.5)));
        assert!(!Shape::Integer.matches(&json!("1")));
    }

    #[test]
    fn donations_shape_accepts_three_forms() {
        assert!(Shape::Donations.matches(&json!(null)));
        assert!(Shape::Donations.matches(&json!("https://ko-fi.com/a")));
        assert!(Shape::Donations.matches(&json!({"github_sponsors": "https://github.com/sponsors/a"})));
        assert!(!Shape::Donations.matches(&json!(["https://ko-fi.com/a"])));
        assert!(!Shape::Donations.matches(&json!(5)));
    }

    #[test]
    fn keyword_rule_reports_one_problem() {
        let ctx = CheckContext::default();
        assert_eq!(
            check_keywords("keywords", &json!([]), &ctx).as_deref(),
            Some("Keywords must contain at least one entry")
        );
        assert_eq!(
            check_keywords("keywords", &json!(["a", 1, 2]), &ctx).as_deref(),
            Some("All keywords must be strings")
        );
        assert!(check_keywords("keywords", &json!(["a"]), &ctx).is_none());
    }

    #[test]
    fn category_rule_needs_established_set() {
        let ctx = CheckContext::default();
        assert!(check_category("category", &json!("anything"), &ctx).is_none());

        let declared = ["crypto", "web"];
        let ctx = CheckContext {
            categories: Some(declared.as_slice()),
        };
        assert!(check_category("category", &json!("web"), &ctx).is_none());
        assert_eq!(
            check_category("category", &json!("nope"), &ctx).as_deref(),
            Some("Invalid category 'nope'. Must be one of: crypto, web")
        );

        let ctx = CheckContext {
            categories: Some(&[][..]),
        };
        assert_eq!(
            check_category("category", &json!("web"), &ctx).as_deref(),
            Some("Invalid category 'web'. Must be one of: ")
        );
    }

    #[test]
    fn tool_table_lists_required_fields_first() {
        let required: Vec<_> = TOOL_FIELDS
            .iter()
            .take_while(|spec| spec.presence == Presence::Required)
            .map(|spec| spec.name)
            .collect();
        assert_eq!(
            required,
            vec!["name", "author", "repo", "demo", "description", "keywords", "category"]
        );
    }
}
