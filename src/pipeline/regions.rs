use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, info};

use crate::config::RegionConfig;
use crate::domain::{RegionId, RegionRecord};
use crate::dump::{DumpReader, DumpRegion};
use crate::error::Result;

/// Decides which regions are listed and in what order.
pub struct RegionClassifier<'a> {
    config: &'a RegionConfig,
}

impl<'a> RegionClassifier<'a> {
    pub fn new(config: &'a RegionConfig) -> Self {
        Self { config }
    }

    /// Normal regions below the special threshold are listed, except the
    /// jovian ones. Thera is always listed.
    pub fn is_listed(&self, id: RegionId) -> bool {
        (!self.config.jovian_ids.contains(&id) && id < self.config.special_threshold)
            || id == self.config.thera_id
    }

    /// Position of `id` in the hub priority list.
    pub fn hub_rank(&self, id: RegionId) -> Option<usize> {
        self.config.hub_ids.iter().position(|hub_id| *hub_id == id)
    }

    /// Hubs first in priority order, then everything else by name.
    pub fn compare(&self, a: &RegionRecord, b: &RegionRecord) -> Ordering {
        match (self.hub_rank(a.id), self.hub_rank(b.id)) {
            (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.name.cmp(&b.name),
        }
    }
}

pub fn select_regions<I>(regions: I, config: &RegionConfig) -> Result<Vec<RegionRecord>>
where
    I: IntoIterator<Item = Result<RegionRecord>>,
{
    let classifier = RegionClassifier::new(config);

    let mut hubs = Vec::new();
    let mut others = Vec::new();
    for region in regions {
        let region = region?;
        if !classifier.is_listed(region.id) {
            debug!("Skipping region {} ({})", region.id, region.name);
            continue;
        }
        if classifier.hub_rank(region.id).is_some() {
            hubs.push(region);
        } else {
            others.push(region);
        }
    }
    debug!("{} hub regions, {} other regions", hubs.len(), others.len());

    hubs.sort_by(|a, b| classifier.compare(a, b));
    others.sort_by(|a, b| classifier.compare(a, b));
    hubs.extend(others);
    Ok(hubs)
}

pub fn build_regions(region_dump: &Path, config: &RegionConfig) -> Result<Vec<RegionRecord>> {
    let regions = select_regions(DumpReader::<_, DumpRegion>::open(region_dump)?, config)?;
    info!("Built region catalog with {} regions", regions.len());
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn regions(input: &str) -> DumpReader<Cursor<&str>, DumpRegion> {
        DumpReader::new(Cursor::new(input), "regions.jsonl")
    }

    #[test]
    fn test_is_listed() {
        let config = RegionConfig::default();
        let classifier = RegionClassifier::new(&config);

        assert!(classifier.is_listed(10000001));
        assert!(classifier.is_listed(31000005));
        assert!(!classifier.is_listed(10000017));
        assert!(!classifier.is_listed(11000001));
        assert!(!classifier.is_listed(31000006));
    }

    #[test]
    fn test_thera_wins_over_threshold() {
        let config = RegionConfig {
            thera_id: 10000004,
            ..RegionConfig::default()
        };
        assert!(RegionClassifier::new(&config).is_listed(10000004));
    }

    #[test]
    fn test_hubs_first_then_by_name() {
        let input = r#"{"_key": 10000042, "name": {"en": "Metropolis"}}
{"_key": 10000001, "name": {"en": "Derelik"}}
{"_key": 10000002, "name": {"en": "The Forge"}}
{"_key": 10000012, "name": {"en": "Curse"}}
{"_key": 10000043, "name": {"en": "Domain"}}
"#;
        let result = select_regions(regions(input), &RegionConfig::default()).unwrap();
        let ids: Vec<RegionId> = result.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![10000002, 10000043, 10000042, 10000012, 10000001]);
    }

    #[test]
    fn test_custom_hub_order() {
        let config = RegionConfig {
            hub_ids: vec![10000043, 10000002],
            ..RegionConfig::default()
        };
        let input = r#"{"_key": 10000002, "name": {"en": "The Forge"}}
{"_key": 10000043, "name": {"en": "Domain"}}
{"_key": 10000042, "name": {"en": "Metropolis"}}
"#;
        let result = select_regions(regions(input), &config).unwrap();
        let ids: Vec<RegionId> = result.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![10000043, 10000002, 10000042]);
    }

    #[test]
    fn test_region_without_name_is_fatal() {
        let err = select_regions(regions(r#"{"_key": 10000001}"#), &RegionConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("name.en"));
    }
}
