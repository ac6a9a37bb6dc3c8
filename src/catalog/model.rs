//! Deserializable representation of `data/tools.json`.
//!
//! The generators work from these types; the validator works from the raw
//! `serde_json::Value` so it can report on documents that would not decode.
//! Category order is the order of keys in the file.

use crate::catalog::donations::Donations;
use crate::catalog::identity::CategoryId;
use crate::error::CatalogError;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Sort key for categories that do not declare `order`.
pub const DEFAULT_CATEGORY_ORDER: i64 = 999;

/// Group used for tools that carry no `category`.
pub const FALLBACK_CATEGORY: &str = "other";

#[derive(Clone, Debug, Deserialize)]
/// Full catalog as stored on disk.
pub struct Catalog {
    pub categories: IndexMap<CategoryId, Category>,
    pub tools: Vec<Tool>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "saturating_order")]
    pub order: Option<i64>,
}

/// Any JSON integer is a valid `order`; values past `i64::MAX` sort last
/// among the declared orders.
fn saturating_order<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::Number(number)) if number.is_i64() => Ok(number.as_i64()),
        Some(Value::Number(number)) if number.is_u64() => Ok(Some(i64::MAX)),
        Some(other) => Err(D::Error::custom(format!(
            "category order must be an integer, found {other}"
        ))),
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One cataloged browser tool.
pub struct Tool {
    pub name: String,
    pub author: String,
    pub repo: String,
    pub demo: String,
    pub description: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub donations: Donations,
    #[serde(default)]
    pub browser_features: Vec<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl Category {
    pub fn sort_order(&self) -> i64 {
        self.order.unwrap_or(DEFAULT_CATEGORY_ORDER)
    }
}

impl Tool {
    /// `owner/repo` for repositories hosted on GitHub, used to derive badges.
    pub fn github_repo_path(&self) -> Option<&str> {
        let (_, path) = self.repo.trim_end_matches('/').rsplit_once("github.com/")?;
        Some(path).filter(|path| !path.is_empty())
    }

    pub fn category_id(&self) -> &str {
        self.category
            .as_ref()
            .map(CategoryId::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }
}

impl Catalog {
    /// Decode a parsed document into the typed catalog.
    pub fn from_document(document: &Value) -> Result<Self, CatalogError> {
        Ok(Catalog::deserialize(document)?)
    }

    /// Read, parse, and decode a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::from_document(&load_document(path)?)
    }

    /// Category ids sorted by declared `order`; ties keep file order.
    pub fn sorted_categories(&self) -> Vec<(&CategoryId, &Category)> {
        let mut sorted: Vec<_> = self.categories.iter().collect();
        sorted.sort_by_key(|(_, category)| category.sort_order());
        sorted
    }

    /// Tools grouped by category id, each group sorted by name ignoring case.
    ///
    /// Groups appear in first-seen order; callers pick the display order.
    pub fn tools_by_category(&self) -> IndexMap<&str, Vec<&Tool>> {
        let mut grouped: IndexMap<&str, Vec<&Tool>> = IndexMap::new();
        for tool in &self.tools {
            grouped.entry(tool.category_id()).or_default().push(tool);
        }
        for tools in grouped.values_mut() {
            tools.sort_by_cached_key(|tool| tool.name.to_lowercase());
        }
        grouped
    }
}

/// Read and parse a catalog file into a JSON document without validation.
pub fn load_document(path: &Path) -> Result<Value, CatalogError> {
    let data = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
