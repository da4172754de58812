use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtdbError, Result};
use crate::index::{index_entries, DisplayRecord, RecordSelector};
use crate::model::{Field, Record};
use crate::query::SearchQuery;
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::helpers::records_by_selectors;

/// Which records an export covers.
#[derive(Debug, Clone)]
pub enum ExportSelection {
    All,
    Selected(Vec<RecordSelector>),
    Matching(SearchQuery),
}

pub fn run(catalog: &Catalog, selection: &ExportSelection, output: &Path) -> Result<CmdResult> {
    let records = resolve_records(catalog, selection)?;

    if records.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No records to export."));
        return Ok(res);
    }

    write_file(output, &records).map_err(|source| ArtdbError::Export {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!("Exported {} record(s) to {}", records.len(), output.display());

    let mut result = CmdResult::default()
        .with_export_path(output.to_path_buf())
        .with_affected_records(records.into_iter().map(|dr| dr.entry).collect());
    result.add_message(CmdMessage::success(format!(
        "Exported {} record(s) to {}",
        result.affected_records.len(),
        output.display()
    )));
    Ok(result)
}

fn write_file(output: &Path, records: &[DisplayRecord]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(output)?);
    write_records(&mut writer, records.iter().map(|dr| &dr.entry.record))?;
    writer.flush()
}

/// Default export file name, stamped with the local time.
pub fn default_filename() -> PathBuf {
    let now = Local::now();
    PathBuf::from(format!("articles-{}.txt", now.format("%Y-%m-%d_%H-%M-%S")))
}

fn resolve_records(catalog: &Catalog, selection: &ExportSelection) -> Result<Vec<DisplayRecord>> {
    match selection {
        ExportSelection::All => Ok(index_entries(catalog.entries())),
        ExportSelection::Selected(selectors) => records_by_selectors(catalog, selectors),
        ExportSelection::Matching(query) => {
            let listed = super::search::run(catalog, query)?.listed_records;
            Ok(listed)
        }
    }
}

/// Writes one labelled field per line, with a blank line after each record.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        for field in Field::ALL {
            writeln!(writer, "{}: {}", field.export_label(), record.get(field))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
