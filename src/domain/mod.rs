use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type TypeId = i64;
pub type GroupId = i64;
pub type RegionId = i64;
pub type MetaGroupId = i64;

/// A type as read from the type dump.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRecord {
    pub id: TypeId,
    pub name: String,
    pub market_group_id: Option<GroupId>,
    pub meta_group_id: MetaGroupId,
}

/// A node of the market group tree, in the shape written to the group catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: GroupId,
    #[serde(rename = "parentId")]
    pub parent_id: Option<GroupId>,
    #[serde(rename = "childsId")]
    pub child_ids: Vec<GroupId>,
    #[serde(rename = "types")]
    pub type_ids: Vec<TypeId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "iconId")]
    pub icon_id: String,
    #[serde(rename = "iconAlt", default)]
    pub icon_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub id: RegionId,
    pub name: String,
}

/// A row of the type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogType {
    pub id: TypeId,
    pub name: String,
    pub meta: MetaGroupId,
}

impl From<TypeRecord> for CatalogType {
    fn from(record: TypeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            meta: record.meta_group_id,
        }
    }
}

/// Alt text keyed by the stringified icon id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconAltMapping(HashMap<String, String>);

impl IconAltMapping {
    /// Alt text for `icon_id`, empty when the icon is unknown.
    pub fn alt_for(&self, icon_id: &str) -> &str {
        self.0.get(icon_id).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for IconAltMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
