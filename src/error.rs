//! Errors raised while loading the catalog file or writing derived artifacts.
//!
//! Content problems inside a well-formed document are never errors; they are
//! reported as violations by [`crate::validation`]. `CatalogError` covers the
//! cases where there is no document to validate at all (unreadable file,
//! invalid JSON) and the cases where a generator cannot index the document.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON syntax in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog does not match the expected shape: {0}")]
    Decode(String),

    #[error("unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// True when the input could not be turned into a JSON document.
    ///
    /// The validator binary uses this to pick its fatal exit status.
    pub fn is_fatal_load(&self) -> bool {
        matches!(self, CatalogError::Read { .. } | CatalogError::Parse { .. })
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
