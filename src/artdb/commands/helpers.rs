use crate::catalog::Catalog;
use crate::error::{ArtdbError, Result};
use crate::index::{DisplayIndex, DisplayRecord, RecordSelector, MIN_ID_PREFIX};
use uuid::Uuid;

/// Resolves selectors to (display index, id) pairs against the current catalog.
///
/// Duplicates are dropped, first occurrence wins. Any selector that does not
/// resolve fails the whole call, so nothing is half-applied.
pub fn resolve_selectors(
    catalog: &Catalog,
    selectors: &[RecordSelector],
) -> Result<Vec<(DisplayIndex, Uuid)>> {
    let mut resolved: Vec<(DisplayIndex, Uuid)> = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let hit = match selector {
            RecordSelector::Index(idx) => resolve_index(catalog, *idx)?,
            RecordSelector::IdPrefix(prefix) => resolve_id_prefix(catalog, prefix)?,
        };
        if !resolved.iter().any(|(_, id)| *id == hit.1) {
            resolved.push(hit);
        }
    }

    Ok(resolved)
}

fn resolve_index(catalog: &Catalog, idx: DisplayIndex) -> Result<(DisplayIndex, Uuid)> {
    catalog
        .entries()
        .get(idx.offset())
        .map(|entry| (idx, entry.id()))
        .ok_or_else(|| {
            ArtdbError::Api(format!(
                "Index {} not found ({} record(s) in catalogue)",
                idx,
                catalog.len()
            ))
        })
}

fn resolve_id_prefix(catalog: &Catalog, prefix: &str) -> Result<(DisplayIndex, Uuid)> {
    let needle: String = prefix.chars().filter(|c| *c != '-').collect();
    if needle.len() < MIN_ID_PREFIX {
        return Err(ArtdbError::Api(format!(
            "Id prefix {} needs at least {} hex digits",
            prefix, MIN_ID_PREFIX
        )));
    }
    let mut hits = catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.id().simple().to_string().starts_with(&needle));

    match (hits.next(), hits.next()) {
        (Some((pos, entry)), None) => Ok((DisplayIndex(pos + 1), entry.id())),
        (None, _) => Err(ArtdbError::RecordNotFound(prefix.to_string())),
        (Some(_), Some(_)) => Err(ArtdbError::Api(format!(
            "Id prefix {} matches more than one record",
            prefix
        ))),
    }
}

pub fn records_by_selectors(
    catalog: &Catalog,
    selectors: &[RecordSelector],
) -> Result<Vec<DisplayRecord>> {
    let resolved = resolve_selectors(catalog, selectors)?;
    let mut records = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let entry = catalog
            .get(&id)
            .cloned()
            .ok_or_else(|| ArtdbError::RecordNotFound(id.to_string()))?;
        records.push(DisplayRecord { entry, index });
    }
    Ok(records)
}
