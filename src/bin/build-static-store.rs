//! Builds all three static catalogs in one run and writes them into a directory.
//!
//! Usage:
//!   build-static-store <types> <groups> <icon-alts> <regions> <out-dir>

use anyhow::{Context, Result};
use clap::Parser;
use static_store::config::Config;
use static_store::logging;
use static_store::pipeline::{build_bundle, BundleInputs};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "build-static-store",
    version,
    about = "Build the market group, type and region catalogs into a directory"
)]
struct Cli {
    /// Line-delimited JSON type dump
    type_dump: PathBuf,

    /// Line-delimited JSON market group dump
    group_dump: PathBuf,

    /// JSON object mapping icon ids to alt text
    icon_alts: PathBuf,

    /// Line-delimited JSON region dump
    region_dump: PathBuf,

    /// Directory receiving market-groups.json, types.json and regions.json
    out_dir: PathBuf,

    /// Optional TOML file overriding the region classification
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_logging();

    let config = Config::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    let inputs = BundleInputs {
        type_dump: args.type_dump,
        group_dump: args.group_dump,
        icon_alts: args.icon_alts,
        region_dump: args.region_dump,
    };

    let summary = build_bundle(&inputs, &config.regions, &args.out_dir)
        .with_context(|| format!("Failed to build static store into {}", args.out_dir.display()))?;

    info!(
        groups = summary.group_count,
        types = summary.type_count,
        regions = summary.region_count,
        "Static store ready"
    );
    eprintln!("market groups: {} -> {}", summary.group_count, summary.market_groups.display());
    eprintln!("types:         {} -> {}", summary.type_count, summary.types.display());
    eprintln!("regions:       {} -> {}", summary.region_count, summary.regions.display());
    Ok(())
}
