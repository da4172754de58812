use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;

use super::add::describe;
use super::helpers::resolve_selectors;

pub fn run(catalog: &mut Catalog, selectors: &[RecordSelector]) -> Result<CmdResult> {
    // Resolve everything first so positions don't shift under us.
    let resolved = resolve_selectors(catalog, selectors)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        if let Some(entry) = catalog.remove(&id) {
            result.add_message(CmdMessage::success(format!(
                "Record deleted ({}): {}",
                display_index,
                describe(&entry.record)
            )));
            result.affected_records.push(entry);
        }
    }

    tracing::info!("Deleted {} record(s)", result.affected_records.len());
    Ok(result)
}
