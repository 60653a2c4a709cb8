use anyhow::{Context, Result};
use clap::Parser;
use static_store::config::Config;
use static_store::{logging, output, pipeline};
use std::path::PathBuf;

/// Build the region catalog and write it to stdout.
#[derive(Parser, Debug)]
#[command(name = "build-regions", version, about = "Build the region catalog, trade hubs first")]
struct Cli {
    /// Line-delimited JSON region dump
    region_dump: PathBuf,

    /// Optional TOML file overriding the hub, jovian and Thera region ids
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_logging();

    let config = Config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    let regions = pipeline::build_regions(&args.region_dump, &config.regions)
        .context("Failed to build regions")?;
    output::write_stdout(&regions).context("Failed to write region catalog")?;
    Ok(())
}
