use anyhow::{Context, Result};
use clap::Parser;
use static_store::{logging, output, pipeline};
use std::path::PathBuf;

/// Build the market group catalog and write it to stdout.
#[derive(Parser, Debug)]
#[command(
    name = "build-market-groups",
    version,
    about = "Build the market group catalog from SDE dumps"
)]
struct Cli {
    /// Line-delimited JSON type dump
    type_dump: PathBuf,

    /// Line-delimited JSON market group dump
    group_dump: PathBuf,

    /// JSON object mapping icon ids to alt text
    icon_alts: PathBuf,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_logging();

    let groups = pipeline::build_market_groups(&args.type_dump, &args.group_dump, &args.icon_alts)
        .context("Failed to build market groups")?;
    output::write_stdout(&groups).context("Failed to write market group catalog")?;
    Ok(())
}
