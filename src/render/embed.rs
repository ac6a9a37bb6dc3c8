//! Site data script: the whole catalog embedded as `window.TOOLS_DATA`.
//!
//! The static page loads this file with a plain `<script>` tag so it works
//! from `file://` without fetching JSON.

use crate::error::CatalogError;
use serde_json::Value;

const GENERATED_BANNER: &str = "// Auto-generated from data/tools.json - DO NOT EDIT MANUALLY
// Run: cargo run --bin generate-html
";

/// Global the site script reads the catalog from.
const DATA_GLOBAL: &str = "window.TOOLS_DATA";

/// Render the embedded-data script for a parsed catalog document.
///
/// The document is embedded as-is, including fields the generators do not
/// otherwise use.
pub fn render_tools_data(document: &Value) -> Result<String, CatalogError> {
    let payload = serde_json::to_string_pretty(document)?;
    Ok(format!("{GENERATED_BANNER}\n{DATA_GLOBAL} = {payload};\n"))
}

/// Number of entries under `tools`, for the generator's summary line.
pub fn tool_count(document: &Value) -> Result<usize, CatalogError> {
    document
        .get("tools")
        .and_then(Value::as_array)
        .map(Vec::len)
        .ok_or_else(|| CatalogError::Decode("'tools' must be an array".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn script_has_banner_and_round_trips() {
        let doc = json!({
            "categories": {"web": {"name": "Web"}, "crypto": {"name": "Crypto"}},
            "tools": [{"name": "X", "extra": {"kept": true}}]
        });
        let script = render_tools_data(&doc).unwrap();

        assert!(script.starts_with(
            "// Auto-generated from data/tools.json - DO NOT EDIT MANUALLY\n// Run: cargo run --bin generate-html\n\nwindow.TOOLS_DATA = {\n  \"categories\": {\n    \"web\""
        ));
        assert!(script.ends_with("};\n"));

        let payload = script
            .split_once(" = ")
            .and_then(|(_, rest)| rest.strip_suffix(";\n"))
            .unwrap();
        let parsed: Value = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn tool_count_requires_array() {
        assert_eq!(tool_count(&json!({"tools": [1, 2, 3]})).unwrap(), 3);
        assert!(matches!(
            tool_count(&json!({"tools": {}})),
            Err(CatalogError::Decode(_))
        ));
        assert!(tool_count(&json!({})).is_err());
    }
}
