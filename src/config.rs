//! Command-line configuration shared by the catalog binaries.
//!
//! Handles:
//! - flag parsing (`--root`, `--data`, `--output`, `--log-level`)
//! - resolving input/output paths against the repository root
//! - logger initialisation

use crate::{DATA_FILE, find_repo_root};
use anyhow::Result;
use clap::{Args, Parser};
use log::debug;
use std::path::{Path, PathBuf};

/// Flags every binary accepts.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Repository root (defaults to TOOLCATALOG_ROOT or the nearest directory containing data/tools.json)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Catalog file to read instead of <root>/data/tools.json
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Arguments for `validate-tools`.
#[derive(Debug, Parser)]
#[command(name = "validate-tools")]
#[command(about = "Validate data/tools.json against the catalog rules")]
#[command(version)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the artifact generators.
#[derive(Debug, Parser)]
#[command(version)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Artifact path to write instead of the default under the repository root
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Resolved paths for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    /// Artifact destination; `None` for the validator.
    pub output_path: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Resolve paths for the validator (input only).
    pub fn for_validator(args: ValidateArgs) -> Result<Self> {
        Self::resolve(args.common, None, None)
    }

    /// Resolve paths for a generator whose artifact defaults to
    /// `<root>/<default_output>`.
    pub fn for_generator(args: GenerateArgs, default_output: &str) -> Result<Self> {
        Self::resolve(args.common, args.output, Some(default_output))
    }

    fn resolve(
        common: CommonArgs,
        output: Option<PathBuf>,
        default_output: Option<&str>,
    ) -> Result<Self> {
        let needs_root =
            common.data.is_none() || (output.is_none() && default_output.is_some());
        let root = if needs_root {
            let root = find_repo_root(common.root.as_deref())?;
            debug!("repository root: {}", root.display());
            Some(root)
        } else {
            None
        };
        let under_root = |relative: &str| -> PathBuf {
            root.as_deref()
                .map(|root| root.join(relative))
                .unwrap_or_else(|| Path::new(relative).to_path_buf())
        };

        let data_path = common.data.unwrap_or_else(|| under_root(DATA_FILE));
        let output_path = output.or_else(|| default_output.map(under_root));
        debug!("catalog file: {}", data_path.display());
        if let Some(path) = &output_path {
            debug!("artifact file: {}", path.display());
        }

        Ok(Config {
            data_path,
            output_path,
            log_level: common.log_level,
        })
    }
}

/// Initialise `env_logger` with `level` unless `RUST_LOG` says otherwise.
///
/// Logs go to stderr so stdout stays reserved for each binary's report.
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_paths_skip_root_discovery() {
        let args = GenerateArgs::parse_from([
            "generate-readme",
            "--data",
            "/nonexistent/tools.json",
            "--output",
            "/nonexistent/README.md",
        ]);
        let config = Config::for_generator(args, "README.md").unwrap();
        assert_eq!(config.data_path, PathBuf::from("/nonexistent/tools.json"));
        assert_eq!(
            config.output_path,
            Some(PathBuf::from("/nonexistent/README.md"))
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn defaults_resolve_under_root() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::create_dir_all(temp.path().join("data")).unwrap();
        std::fs::write(temp.path().join(DATA_FILE), "{}").unwrap();

        let root = temp.path().to_str().unwrap();
        let args = GenerateArgs::parse_from(["generate-html", "--root", root, "--log-level", "debug"]);
        let config = Config::for_generator(args, "docs/js/tools-data.js").unwrap();
        let canonical = temp.path().canonicalize().unwrap();
        assert_eq!(config.data_path, canonical.join(DATA_FILE));
        assert_eq!(
            config.output_path,
            Some(canonical.join("docs/js/tools-data.js"))
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn validator_has_no_output() {
        let args = ValidateArgs::parse_from(["validate-tools", "--data", "tools.json"]);
        let config = Config::for_validator(args).unwrap();
        assert_eq!(config.data_path, PathBuf::from("tools.json"));
        assert!(config.output_path.is_none());
    }

    #[test]
    fn invalid_root_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().to_str().unwrap();
        let args = ValidateArgs::parse_from(["validate-tools", "--root", root]);
        assert!(Config::for_validator(args).is_err());
    }
}
