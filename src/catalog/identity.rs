use serde::Deserialize;

/// Identifier of a category: its key under `categories` in `data/tools.json`.
///
/// Tools refer to categories by this key, not by display name.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
