use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::{CatalogType, GroupRecord, TypeId, TypeRecord};
use crate::dump::{read_json_file, DumpReader, DumpType};
use crate::error::Result;

/// Union of the type ids listed by any market group.
pub fn used_type_ids(groups: &[GroupRecord]) -> HashSet<TypeId> {
    groups
        .iter()
        .flat_map(|group| group.type_ids.iter().copied())
        .collect()
}

/// Keeps the types listed in `used`, sorted by name. Every record is read and
/// validated, including the ones that are dropped.
pub fn select_types<I>(types: I, used: &HashSet<TypeId>) -> Result<Vec<CatalogType>>
where
    I: IntoIterator<Item = Result<TypeRecord>>,
{
    let mut selected = Vec::new();
    let mut seen = 0usize;
    for record in types {
        let record = record?;
        seen += 1;
        if used.contains(&record.id) {
            selected.push(CatalogType::from(record));
        }
    }
    debug!("Kept {} of {} types", selected.len(), seen);

    selected.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(selected)
}

/// The part of a group catalog row the type builder reads.
#[derive(Debug, Deserialize)]
struct CatalogGroupTypes {
    types: Vec<TypeId>,
}

fn build_used_types(type_dump: &Path, used: &HashSet<TypeId>) -> Result<Vec<CatalogType>> {
    let types = select_types(DumpReader::<_, DumpType>::open(type_dump)?, used)?;
    info!("Built type catalog with {} types", types.len());
    Ok(types)
}

/// Builds the type catalog from an in-memory group catalog.
pub fn build_types_from_groups(
    type_dump: &Path,
    groups: &[GroupRecord],
) -> Result<Vec<CatalogType>> {
    let used = used_type_ids(groups);
    debug!("{} types referenced by {} market groups", used.len(), groups.len());
    build_used_types(type_dump, &used)
}

/// Builds the type catalog from a group catalog file. Only the `types` list of
/// each row is read.
pub fn build_types(type_dump: &Path, group_catalog: &Path) -> Result<Vec<CatalogType>> {
    let groups: Vec<CatalogGroupTypes> = read_json_file(group_catalog)?;
    let used: HashSet<TypeId> = groups
        .iter()
        .flat_map(|group| group.types.iter().copied())
        .collect();
    debug!("{} types referenced by {} market groups", used.len(), groups.len());
    build_used_types(type_dump, &used)
}
