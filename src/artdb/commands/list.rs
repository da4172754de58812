use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_entries;

/// The whole catalogue, unfiltered.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let listed = index_entries(catalog.reset_search());
    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::CatalogFixture;
    use crate::index::DisplayIndex;

    #[test]
    fn lists_everything_in_order() {
        let catalog = CatalogFixture::new().with_records(3).build();
        let result = run(&catalog).unwrap();

        assert_eq!(result.listed_records.len(), 3);
        assert_eq!(result.listed_records[0].index, DisplayIndex(1));
        assert_eq!(result.listed_records[2].entry.record.author(), "Author 3");
    }

    #[test]
    fn empty_catalogue_lists_nothing() {
        let result = run(&Catalog::new()).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
