use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::domain::{GroupId, GroupRecord, IconAltMapping, TypeId, TypeRecord};
use crate::dump::{read_json_file, DumpGroup, DumpReader, DumpType};
use crate::error::{Result, StaticStoreError};

/// Builds the market group tree.
///
/// Passes must run in order: [`load_groups`](Self::load_groups),
/// [`attach_types`](Self::attach_types), [`link_children`](Self::link_children),
/// then [`finish`](Self::finish) which sorts members and hands back the groups
/// in the order they first appeared in the group dump.
pub struct MarketGroupBuilder {
    icon_alts: IconAltMapping,
    groups: IndexMap<GroupId, GroupRecord>,
    type_names: HashMap<TypeId, String>,
}

impl MarketGroupBuilder {
    pub fn new(icon_alts: IconAltMapping) -> Self {
        Self {
            icon_alts,
            groups: IndexMap::new(),
            type_names: HashMap::new(),
        }
    }

    /// Stores the base fields of every group. A repeated id replaces the earlier
    /// record but keeps its position.
    pub fn load_groups<I>(&mut self, groups: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<GroupRecord>>,
    {
        for group in groups {
            let mut group = group?;
            group.icon_alt = self.icon_alts.alt_for(&group.icon_id).to_string();
            let id = group.id;
            if self.groups.insert(id, group).is_some() {
                warn!("Duplicate market group id {}, keeping the last record", id);
            }
        }
        debug!("Loaded {} market groups", self.groups.len());
        Ok(())
    }

    /// Records type names and adds every type to its market group.
    pub fn attach_types<I>(&mut self, types: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<TypeRecord>>,
    {
        let mut attached = 0usize;
        for record in types {
            let record = record?;
            if let Some(group_id) = record.market_group_id {
                let group = self.groups.get_mut(&group_id).ok_or_else(|| {
                    StaticStoreError::DanglingReference {
                        id: group_id,
                        referenced_by: format!("type {}", record.id),
                    }
                })?;
                group.type_ids.push(record.id);
                attached += 1;
            }
            self.type_names.insert(record.id, record.name);
        }
        debug!(
            "Read {} types, {} attached to market groups",
            self.type_names.len(),
            attached
        );
        Ok(())
    }

    /// Adds every group to its parent's children.
    pub fn link_children(&mut self) -> Result<()> {
        let links: Vec<(GroupId, GroupId)> = self
            .groups
            .values()
            .filter_map(|group| group.parent_id.map(|parent_id| (parent_id, group.id)))
            .collect();

        for (parent_id, child_id) in &links {
            let parent = self.groups.get_mut(parent_id).ok_or_else(|| {
                StaticStoreError::DanglingReference {
                    id: *parent_id,
                    referenced_by: format!("market group {}", child_id),
                }
            })?;
            parent.child_ids.push(*child_id);
        }
        debug!("Linked {} child market groups", links.len());
        Ok(())
    }

    fn sort_members(&mut self) {
        let type_names = &self.type_names;
        for group in self.groups.values_mut() {
            group
                .type_ids
                .sort_by(|a, b| type_names.get(a).cmp(&type_names.get(b)));
        }

        for index in 0..self.groups.len() {
            let mut child_ids = std::mem::take(&mut self.groups[index].child_ids);
            let groups = &self.groups;
            let name_of = |id: &GroupId| groups.get(id).map(|group| group.name.as_str());
            child_ids.sort_by(|a, b| name_of(a).cmp(&name_of(b)));
            self.groups[index].child_ids = child_ids;
        }
    }

    pub fn finish(mut self) -> Vec<GroupRecord> {
        self.sort_members();
        self.groups.into_values().collect()
    }
}

/// Runs every pass of the group builder over the dump files.
pub fn build_market_groups(
    type_dump: &Path,
    group_dump: &Path,
    icon_alt_path: &Path,
) -> Result<Vec<GroupRecord>> {
    let icon_alts: IconAltMapping = read_json_file(icon_alt_path)?;
    debug!("Loaded {} icon alt texts", icon_alts.len());

    let mut builder = MarketGroupBuilder::new(icon_alts);
    builder.load_groups(DumpReader::<_, DumpGroup>::open(group_dump)?)?;
    builder.attach_types(DumpReader::<_, DumpType>::open(type_dump)?)?;
    builder.link_children()?;

    let groups = builder.finish();
    info!("Built market group catalog with {} groups", groups.len());
    Ok(groups)
}
