//! Validates `data/tools.json` and reports every rule violation at once.
//!
//! Exit status: 0 when the catalog is valid, 1 when any violation is found,
//! 2 when the file cannot be read or is not valid JSON.

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use serde_json::Value;
use toolcatalog::{Config, ValidateArgs, check_catalog, init_logging, load_document};

const EXIT_INVALID: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn run() -> Result<i32> {
    let args = ValidateArgs::parse();
    init_logging(&args.common.log_level);
    let config = Config::for_validator(args)?;

    let document = match load_document(&config.data_path) {
        Ok(document) => document,
        Err(err) if err.is_fatal_load() => {
            println!("ERROR: {err}");
            return Ok(EXIT_FATAL);
        }
        Err(err) => return Err(err.into()),
    };
    info!("loaded {}", config.data_path.display());

    let report = check_catalog(&document);
    debug!("validation produced {} violation(s)", report.len());

    if !report.is_valid() {
        info!("violations by kind: {}", report.summary());
        println!("Validation FAILED:");
        for violation in report.violations() {
            println!("  - {violation}");
        }
        return Ok(EXIT_INVALID);
    }

    let tool_count = document
        .get("tools")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let category_count = document
        .get("categories")
        .and_then(Value::as_object)
        .map_or(0, |categories| categories.len());
    println!(
        "Validation PASSED: {tool_count} tools, {category_count} categories validated successfully"
    );
    Ok(0)
}
