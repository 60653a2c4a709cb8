use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::RegionConfig;
use crate::constants::{MARKET_GROUPS_FILE, REGIONS_FILE, TYPES_FILE};
use crate::error::Result;
use crate::output::write_file;

use super::{build_market_groups, build_regions, build_types_from_groups};

/// Input dumps for a full static store build.
#[derive(Debug, Clone)]
pub struct BundleInputs {
    pub type_dump: PathBuf,
    pub group_dump: PathBuf,
    pub icon_alts: PathBuf,
    pub region_dump: PathBuf,
}

/// Paths of the catalogs written by [`build_bundle`].
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSummary {
    pub market_groups: PathBuf,
    pub types: PathBuf,
    pub regions: PathBuf,
    pub group_count: usize,
    pub type_count: usize,
    pub region_count: usize,
}

/// Builds the three catalogs and writes them into `out_dir`.
///
/// The type catalog is derived from the in-memory group catalog, so the two
/// always agree. Any failure stops the build; catalogs already written are left
/// in place.
pub fn build_bundle(
    inputs: &BundleInputs,
    region_config: &RegionConfig,
    out_dir: &Path,
) -> Result<BundleSummary> {
    let groups = build_market_groups(&inputs.type_dump, &inputs.group_dump, &inputs.icon_alts)?;
    let market_groups = out_dir.join(MARKET_GROUPS_FILE);
    write_file(&market_groups, &groups)?;

    let types = build_types_from_groups(&inputs.type_dump, &groups)?;
    let types_path = out_dir.join(TYPES_FILE);
    write_file(&types_path, &types)?;

    let regions = build_regions(&inputs.region_dump, region_config)?;
    let regions_path = out_dir.join(REGIONS_FILE);
    write_file(&regions_path, &regions)?;

    info!("Static store written to {}", out_dir.display());

    Ok(BundleSummary {
        market_groups,
        types: types_path,
        regions: regions_path,
        group_count: groups.len(),
        type_count: types.len(),
        region_count: regions.len(),
    })
}
