use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "validate-tools" => env!("CARGO_BIN_EXE_validate-tools"),
        "generate-readme" => env!("CARGO_BIN_EXE_generate-readme"),
        "generate-html" => env!("CARGO_BIN_EXE_generate-html"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

/// Run a command to completion, returning its output whatever the status.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.env_remove("RUST_LOG");
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

/// Temporary repository root holding `document` as `data/tools.json`.
pub fn catalog_root(document: &Value) -> Result<TempDir> {
    let temp = TempDir::new().context("failed to allocate catalog root")?;
    write_catalog(temp.path(), &serde_json::to_string_pretty(document)?)?;
    Ok(temp)
}

/// Write raw catalog text under `<root>/data/tools.json`.
pub fn write_catalog(root: &Path, text: &str) -> Result<PathBuf> {
    let data_dir = root.join("data");
    fs::create_dir_all(&data_dir)?;
    let path = data_dir.join("tools.json");
    fs::write(&path, text)?;
    Ok(path)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
