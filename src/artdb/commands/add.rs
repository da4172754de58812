use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub fn run(catalog: &mut Catalog, record: Record) -> Result<CmdResult> {
    let entry = catalog.add(record).clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        catalog.len(),
        describe(&entry.record)
    )));
    Ok(result.with_affected_records(vec![entry]))
}

/// Short "Author, Title" label used in command messages.
pub(crate) fn describe(record: &Record) -> String {
    match (record.author().trim(), record.title().trim()) {
        ("", "") => "(untitled)".to_string(),
        (author, "") => author.to_string(),
        ("", title) => title.to_string(),
        (author, title) => format!("{}, {}", author, title),
    }
}
