use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayRecord};
use crate::query::SearchQuery;

/// Matching records, each keeping its position in the full catalogue.
pub fn run(catalog: &Catalog, query: &SearchQuery) -> Result<CmdResult> {
    let hits = catalog.search_positions(query)?;
    tracing::debug!(
        "Search author={:?} title={:?} mode={} matched {} of {}",
        query.author(),
        query.title(),
        query.mode(),
        hits.len(),
        catalog.len()
    );

    let listed = hits
        .into_iter()
        .map(|(pos, entry)| DisplayRecord {
            entry: entry.clone(),
            index: DisplayIndex(pos + 1),
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}
