use serde::Deserialize;
use serde_json::Value;

use super::{DumpRecord, LineRef};
use crate::constants::{DEFAULT_ICON_ID, DEFAULT_META_GROUP_ID};
use crate::domain::{
    GroupId, GroupRecord, MetaGroupId, RegionId, RegionRecord, TypeId, TypeRecord,
};
use crate::error::Result;

/// Localized text block; only the English text is used.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub en: Option<String>,
}

fn english_name(name: Option<LocalizedText>, at: LineRef<'_>) -> Result<String> {
    name.and_then(|text| text.en).ok_or_else(|| at.missing("name.en"))
}

#[derive(Debug, Deserialize)]
pub struct DumpType {
    #[serde(rename = "_key")]
    pub key: Option<TypeId>,
    pub name: Option<LocalizedText>,
    #[serde(rename = "marketGroupID")]
    pub market_group_id: Option<GroupId>,
    #[serde(rename = "metaGroupID")]
    pub meta_group_id: Option<MetaGroupId>,
}

impl DumpRecord for DumpType {
    type Record = TypeRecord;

    fn into_record(self, at: LineRef<'_>) -> Result<TypeRecord> {
        let id = self.key.ok_or_else(|| at.missing("_key"))?;
        Ok(TypeRecord {
            id,
            name: english_name(self.name, at)?,
            market_group_id: self.market_group_id,
            meta_group_id: self.meta_group_id.unwrap_or(DEFAULT_META_GROUP_ID),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DumpGroup {
    #[serde(rename = "_key")]
    pub key: Option<GroupId>,
    #[serde(rename = "parentGroupID")]
    pub parent_group_id: Option<GroupId>,
    #[serde(rename = "iconID")]
    pub icon_id: Option<Value>,
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
}

/// Icon ids are catalogued as strings whatever their JSON type in the dump.
fn icon_id_string(icon_id: Option<Value>) -> String {
    match icon_id {
        None | Some(Value::Null) => DEFAULT_ICON_ID.to_string(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

impl DumpRecord for DumpGroup {
    /// The group's base fields. Type and child links and the icon alt text are
    /// filled in by the market group builder.
    type Record = GroupRecord;

    fn into_record(self, at: LineRef<'_>) -> Result<GroupRecord> {
        let id = self.key.ok_or_else(|| at.missing("_key"))?;
        Ok(GroupRecord {
            id,
            parent_id: self.parent_group_id,
            child_ids: Vec::new(),
            type_ids: Vec::new(),
            name: english_name(self.name, at)?,
            description: self.description.and_then(|d| d.en).unwrap_or_default(),
            icon_id: icon_id_string(self.icon_id),
            icon_alt: String::new(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct DumpRegion {
    #[serde(rename = "_key")]
    pub key: Option<RegionId>,
    pub name: Option<LocalizedText>,
}

impl DumpRecord for DumpRegion {
    type Record = RegionRecord;

    fn into_record(self, at: LineRef<'_>) -> Result<RegionRecord> {
        let id = self.key.ok_or_else(|| at.missing("_key"))?;
        Ok(RegionRecord {
            id,
            name: english_name(self.name, at)?,
        })
    }
}
