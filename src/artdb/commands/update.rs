use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, RecordUpdate};
use crate::error::Result;

use super::add::describe;
use super::helpers::resolve_selectors;

pub fn run(catalog: &mut Catalog, updates: &[RecordUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    // Resolve every selector before touching anything.
    let mut planned = Vec::with_capacity(updates.len());
    for update in updates {
        let resolved = resolve_selectors(catalog, std::slice::from_ref(&update.selector))?;
        if let Some((display_index, id)) = resolved.into_iter().next() {
            planned.push((display_index, id, &update.patch));
        }
    }

    let mut result = CmdResult::default();
    for (display_index, id, patch) in planned {
        let Some(current) = catalog.get(&id) else {
            result.add_message(CmdMessage::warning(format!(
                "Record {} is no longer in the catalogue, nothing changed",
                display_index
            )));
            continue;
        };
        let record = patch.apply(&current.record);

        if let Some(entry) = catalog.update(&id, record) {
            result.add_message(CmdMessage::success(format!(
                "Record updated ({}): {}",
                display_index,
                describe(&entry.record)
            )));
            result.affected_records.push(entry.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::error::ArtdbError;
    use crate::index::{DisplayIndex, RecordSelector};
    use crate::model::RecordPatch;

    fn retitle(index: usize, title: &str) -> RecordUpdate {
        RecordUpdate::new(
            RecordSelector::Index(DisplayIndex(index)),
            RecordPatch {
                title: Some(title.to_string()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn updates_selected_record_in_place() {
        let mut catalog = CatalogFixture::new().with_records(3).build();
        let id = catalog.entries()[1].id();

        let result = run(&mut catalog, &[retitle(2, "Revised")]).unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(catalog.entries()[1].id(), id);
        assert_eq!(catalog.entries()[1].record.title(), "Revised");
        assert_eq!(catalog.entries()[1].record.author(), "Author 2");
        assert_eq!(catalog.entries()[0].record.title(), "Title 1");
    }

    #[test]
    fn unknown_index_changes_nothing() {
        let mut catalog = CatalogFixture::new().with_records(2).build();
        let before = catalog.entries().to_vec();

        let err = run(&mut catalog, &[retitle(1, "ok"), retitle(9, "nope")]).unwrap_err();

        assert!(matches!(err, ArtdbError::Api(_)));
        assert_eq!(catalog.entries(), before.as_slice());
    }

    #[test]
    fn empty_patch_is_rejected() {
        let err = RecordUpdate::new(
            RecordSelector::Index(DisplayIndex(1)),
            RecordPatch::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ArtdbError::Api(_)));
    }

    #[test]
    fn patches_apply_in_order() {
        let mut catalog = CatalogFixture::new().with_records(1).build();
        run(&mut catalog, &[retitle(1, "First"), retitle(1, "Second")]).unwrap();
        assert_eq!(catalog.entries()[0].record.title(), "Second");
        assert_eq!(catalog.len(), 1);
    }
}
