use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordSelector;

use super::helpers::records_by_selectors;

pub fn run(catalog: &Catalog, selectors: &[RecordSelector]) -> Result<CmdResult> {
    let records = records_by_selectors(catalog, selectors)?;
    Ok(CmdResult::default().with_listed_records(records))
}
