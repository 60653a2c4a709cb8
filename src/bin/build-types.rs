use anyhow::{Context, Result};
use clap::Parser;
use static_store::{logging, output, pipeline};
use std::path::PathBuf;

/// Build the type catalog and write it to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "build-types",
    version,
    about = "Build the type catalog from the type dump and group catalog"
)]
struct Cli {
    /// Line-delimited JSON type dump
    type_dump: PathBuf,

    /// Group catalog written by build-market-groups
    group_catalog: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_logging();

    let types = pipeline::build_types(&args.type_dump, &args.group_catalog)
        .with_context(|| format!("Failed to build types from {}", args.group_catalog.display()))?;
    output::write_stdout(&types).context("Failed to write type catalog")?;
    Ok(())
}
