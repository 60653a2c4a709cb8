// Catalog builders: market groups, types (derived from the group catalog), regions

pub mod bundle;
pub mod market_groups;
pub mod regions;
pub mod types;

// Re-export the entry point of each builder
pub use bundle::{build_bundle, BundleInputs, BundleSummary};
pub use market_groups::{build_market_groups, MarketGroupBuilder};
pub use regions::{build_regions, select_regions, RegionClassifier};
pub use types::{build_types, build_types_from_groups, select_types, used_type_ids};
