use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{
    HUB_REGION_IDS, JOVIAN_REGION_IDS, SPECIAL_REGION_THRESHOLD, THERA_REGION_ID,
};
use crate::domain::RegionId;
use crate::error::{Result, StaticStoreError};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub regions: RegionConfig,
}

/// Which regions the region catalog keeps and how it orders them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegionConfig {
    pub thera_id: RegionId,
    pub jovian_ids: Vec<RegionId>,
    /// Priority order of the trade hubs at the head of the catalog.
    pub hub_ids: Vec<RegionId>,
    pub special_threshold: RegionId,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            thera_id: THERA_REGION_ID,
            jovian_ids: JOVIAN_REGION_IDS.to_vec(),
            hub_ids: HUB_REGION_IDS.to_vec(),
            special_threshold: SPECIAL_REGION_THRESHOLD,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            StaticStoreError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let regions = &self.regions;
        if let Some(id) = regions
            .hub_ids
            .iter()
            .find(|id| regions.jovian_ids.contains(id))
        {
            return Err(StaticStoreError::Config(format!(
                "region {} is listed both as a hub and as jovian",
                id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.regions.thera_id, 31000005);
        assert_eq!(config.regions.jovian_ids, vec![10000004, 10000017, 10000019]);
        assert_eq!(
            config.regions.hub_ids,
            vec![10000002, 10000043, 10000030, 10000032, 10000042]
        );
        assert_eq!(config.regions.special_threshold, 11000000);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = Config::from_toml_str("[regions]\nhub_ids = [10000043, 10000002]\n").unwrap();
        assert_eq!(config.regions.hub_ids, vec![10000043, 10000002]);
        assert_eq!(config.regions.thera_id, THERA_REGION_ID);
        assert_eq!(config.regions.jovian_ids, JOVIAN_REGION_IDS.to_vec());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_hub_that_is_jovian_is_rejected() {
        let err = Config::from_toml_str("[regions]\nhub_ids = [10000004]\n").unwrap_err();
        assert!(matches!(err, StaticStoreError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = Config::from_toml_str("[regions\n").unwrap_err();
        assert!(matches!(err, StaticStoreError::Toml(_)));
    }
}
