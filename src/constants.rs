//! Region and catalog constants shared across the builders.
use crate::domain::{MetaGroupId, RegionId};

/// Thera is a wormhole region but is always listed.
pub const THERA_REGION_ID: RegionId = 31000005;

/// Jovian regions are never listed.
pub const JOVIAN_REGION_IDS: [RegionId; 3] = [10000004, 10000017, 10000019];

/// Trade hub regions in display priority order:
/// The Forge, Domain, Heimatar, Sinq Laison, Metropolis.
pub const HUB_REGION_IDS: [RegionId; 5] = [10000002, 10000043, 10000030, 10000032, 10000042];

/// Region ids at or above this value are wormhole or special regions.
pub const SPECIAL_REGION_THRESHOLD: RegionId = 11000000;

/// Meta group assigned to types whose dump record has none.
pub const DEFAULT_META_GROUP_ID: MetaGroupId = 1;

/// Icon id used for groups whose dump record has none.
pub const DEFAULT_ICON_ID: &str = "0";

// Catalog file names written by the bundle builder
pub const MARKET_GROUPS_FILE: &str = "market-groups.json";
pub const TYPES_FILE: &str = "types.json";
pub const REGIONS_FILE: &str = "regions.json";
