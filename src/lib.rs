//! Shared library for the in-browser security tools catalog.
//!
//! The catalog lives in `data/tools.json`. The crate exposes the validator
//! (`validation`), the typed catalog model (`catalog`), and the generators for
//! the README and the site's embedded data script (`render`). Public functions
//! here form the contract the binaries depend on: repository discovery, fixed
//! artifact locations, and whole-file artifact writes.

use anyhow::{Context, Result, bail};
use std::io::Write;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod validation;

pub use catalog::{
    Catalog, Category, CategoryId, DonationPlatforms, Donations, Tool, load_document,
};
pub use config::{CommonArgs, Config, GenerateArgs, ValidateArgs, init_logging};
pub use error::CatalogError;
pub use render::{render_readme, render_tools_data};
pub use validation::{ValidationReport, Violation, ViolationKind, check_catalog, validate};

/// Catalog file, relative to the repository root.
pub const DATA_FILE: &str = "data/tools.json";
/// README listing written by `generate-readme`.
pub const README_FILE: &str = "README.md";
/// Site data script written by `generate-html`.
pub const TOOLS_DATA_FILE: &str = "docs/js/tools-data.js";

const ROOT_ENV: &str = "TOOLCATALOG_ROOT";

/// Returns true when `candidate` looks like the repository root.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(DATA_FILE).is_file()
}

fn repo_root_from_hint(hint: &Path) -> Option<PathBuf> {
    if hint.as_os_str().is_empty() || !is_repo_root(hint) {
        return None;
    }
    fs::canonicalize(hint).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root.
///
/// An explicit root (from `--root`) must contain `data/tools.json` or the call
/// fails. Otherwise the search honors `TOOLCATALOG_ROOT`, then climbs from the
/// working directory, then from the executable, and finally falls back to the
/// crate directory recorded at compile time.
pub fn find_repo_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return repo_root_from_hint(root).with_context(|| {
            format!("{} does not contain {DATA_FILE}", root.display())
        });
    }

    if let Some(env_root) = env::var_os(ROOT_ENV) {
        if let Some(root) = repo_root_from_hint(Path::new(&env_root)) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(root) = repo_root_from_hint(Path::new(env!("CARGO_MANIFEST_DIR"))) {
        return Ok(root);
    }

    bail!("Unable to locate the catalog repository root. Set {ROOT_ENV} or pass --root.");
}

/// Replace `path` with `contents` in one step.
///
/// The contents go to a temporary file beside the target which is then
/// renamed over it, so readers never observe a half-written artifact. Missing
/// parent directories are created.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("creating directory {}", parent.display()))?;

    let mut staged = NamedTempFile::new_in(parent)
        .with_context(|| format!("staging {}", path.display()))?;
    staged
        .write_all(contents.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|err| CatalogError::Write {
            path: path.to_path_buf(),
            source: err.error,
        })?;
    Ok(())
}
