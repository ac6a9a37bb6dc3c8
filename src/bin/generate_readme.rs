//! Regenerates `README.md` from `data/tools.json`.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use toolcatalog::{
    Catalog, Config, GenerateArgs, README_FILE, init_logging, render_readme, write_artifact,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = GenerateArgs::parse();
    init_logging(&args.common.log_level);
    let config = Config::for_generator(args, README_FILE)?;
    let output = config
        .output_path
        .as_deref()
        .context("no output path resolved")?;

    let catalog = Catalog::load(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    info!(
        "rendering {} tools in {} categories",
        catalog.tools.len(),
        catalog.categories.len()
    );

    let readme = render_readme(&catalog, Utc::now());
    write_artifact(output, &readme)?;

    println!("README.md generated with {} tools", catalog.tools.len());
    Ok(())
}
