//! Regenerates `docs/js/tools-data.js` so the static site can load the
//! catalog over `file://`.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use toolcatalog::render::tool_count;
use toolcatalog::{
    Config, GenerateArgs, TOOLS_DATA_FILE, init_logging, load_document, render_tools_data,
    write_artifact,
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
    let config = Config::for_generator(args, TOOLS_DATA_FILE)?;
    let output = config
        .output_path
        .as_deref()
        .context("no output path resolved")?;

    let document = load_document(&config.data_path)?;
    let count = tool_count(&document)
        .with_context(|| format!("reading tools from {}", config.data_path.display()))?;
    info!("embedding {count} tools");

    let script = render_tools_data(&document)?;
    write_artifact(output, &script)?;

    println!("{TOOLS_DATA_FILE} generated with {count} tools");
    Ok(())
}
