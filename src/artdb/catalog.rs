//! # Catalog
//!
//! The authoritative, ordered, in-memory collection of records for one session.
//!
//! Records keep their insertion order. Each one is wrapped in an [`Entry`] with
//! a generated id, and `update`/`remove` match on that id only, so two records
//! with identical fields are still told apart. An id that is not present is a
//! no-op for both operations; the return value tells the caller whether
//! anything happened.
//!
//! Persistence is whole-snapshot: [`Catalog::load`] reads everything through a
//! [`SnapshotStore`], [`Catalog::save`] writes everything back. The catalog
//! remembers whether it changed since the last load or save so callers can skip
//! writing an unchanged snapshot.

use crate::error::{PersistenceError, Result};
use crate::model::{Entry, Record};
use crate::query::SearchQuery;
use crate::store::SnapshotStore;
use uuid::Uuid;

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    dirty: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            dirty: false,
        }
    }

    /// Read the whole snapshot from `store`.
    pub fn load<S: SnapshotStore>(store: &S) -> std::result::Result<Self, PersistenceError> {
        let entries = store.load()?;
        Ok(Self::from_entries(entries))
    }

    /// Write the whole collection to `store`, replacing any previous snapshot.
    pub fn save<S: SnapshotStore>(&mut self, store: &S) -> std::result::Result<(), PersistenceError> {
        store.save(&self.entries)?;
        self.dirty = false;
        Ok(())
    }

    /// The live collection, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, id: &Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.metadata.id == id)
    }

    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.metadata.id == id)
    }

    /// Append a record. Duplicates are allowed.
    pub fn add(&mut self, record: Record) -> &Entry {
        self.entries.push(Entry::new(record));
        self.dirty = true;
        let added = &self.entries[self.entries.len() - 1];
        tracing::debug!("Added record {}", added.metadata.id);
        added
    }

    /// Replace the record held under `id`, keeping its position.
    ///
    /// Returns `None` and leaves the catalog untouched when `id` is unknown.
    pub fn update(&mut self, id: &Uuid, record: Record) -> Option<&Entry> {
        let Some(pos) = self.position(id) else {
            tracing::debug!("Update skipped, no record {}", id);
            return None;
        };
        self.entries[pos].replace(record);
        self.dirty = true;
        Some(&self.entries[pos])
    }

    /// Remove the record held under `id`, if any.
    pub fn remove(&mut self, id: &Uuid) -> Option<Entry> {
        let Some(pos) = self.position(id) else {
            tracing::debug!("Remove skipped, no record {}", id);
            return None;
        };
        self.dirty = true;
        Some(self.entries.remove(pos))
    }

    /// All entries matching `query`, in catalog order.
    ///
    /// Fails with `InvalidQuery` when both terms are blank.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<&Entry>> {
        Ok(self
            .search_positions(query)?
            .into_iter()
            .map(|(_, e)| e)
            .collect())
    }

    /// Like [`Catalog::search`], with each hit's zero-based position.
    pub fn search_positions(&self, query: &SearchQuery) -> Result<Vec<(usize, &Entry)>> {
        query.validate()?;
        Ok(self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| query.matches(&e.record))
            .collect())
    }

    /// The unfiltered collection.
    pub fn reset_search(&self) -> &[Entry] {
        &self.entries
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for catalogs used across command and API tests.
    pub struct CatalogFixture {
        pub catalog: Catalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                self.catalog.add(Record::new(
                    format!("Author {}", i + 1),
                    format!("Title {}", i + 1),
                    format!("keyword{}", i + 1),
                    format!("Summary of article {}", i + 1),
                    format!("2020-01-{:02}", (i % 28) + 1),
                    format!("00{}.1", i + 1),
                ));
            }
            self
        }

        pub fn with_record(mut self, author: &str, title: &str) -> Self {
            self.catalog
                .add(Record::new(author, title, "", "", "2024-01-01", ""));
            self
        }

        pub fn build(self) -> Catalog {
            self.catalog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::CatalogFixture;
    use super::*;
    use crate::error::ArtdbError;
    use crate::query::SearchMode;
    use crate::store::memory::InMemoryStore;

    fn ivanov_petrov() -> Catalog {
        CatalogFixture::new()
            .with_record("Ivanov", "X")
            .with_record("Petrov", "Y")
            .build()
    }

    fn authors(entries: &[&Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.record.author().to_string())
            .collect()
    }

    #[test]
    fn add_appends_in_order_and_allows_duplicates() {
        let mut catalog = Catalog::new();
        catalog.add(Record::new("A", "T", "", "", "", ""));
        catalog.add(Record::new("B", "T", "", "", "", ""));
        catalog.add(Record::new("A", "T", "", "", "", ""));

        let names: Vec<_> = catalog.entries().iter().map(|e| e.record.author()).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert!(catalog.is_dirty());
    }

    #[test]
    fn update_replaces_in_place() {
        let mut catalog = CatalogFixture::new().with_records(3).build();
        let id = catalog.entries()[1].id();

        let updated = catalog
            .update(&id, Record::new("New", "Title", "", "", "", ""))
            .unwrap();
        assert_eq!(updated.id(), id);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[1].record.author(), "New");
        assert_eq!(catalog.entries()[0].record.author(), "Author 1");
        assert_eq!(catalog.entries()[2].record.author(), "Author 3");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut catalog = CatalogFixture::new().with_records(2).build();
        catalog.save(&InMemoryStore::new()).unwrap();
        let before = catalog.entries().to_vec();

        let result = catalog.update(&Uuid::new_v4(), Record::new("X", "", "", "", "", ""));

        assert!(result.is_none());
        assert_eq!(catalog.entries(), before.as_slice());
        assert!(!catalog.is_dirty());
    }

    #[test]
    fn update_targets_identity_not_fields() {
        let mut catalog = Catalog::new();
        catalog.add(Record::new("Same", "Same", "", "", "", ""));
        catalog.add(Record::new("Same", "Same", "", "", "", ""));
        let second = catalog.entries()[1].id();

        catalog.update(&second, Record::new("Changed", "Same", "", "", "", ""));

        assert_eq!(catalog.entries()[0].record.author(), "Same");
        assert_eq!(catalog.entries()[1].record.author(), "Changed");
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let mut catalog = CatalogFixture::new().with_records(3).build();
        let id = catalog.entries()[0].id();

        let removed = catalog.remove(&id).unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&id).is_none());
        assert_eq!(catalog.entries()[0].record.author(), "Author 2");
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut catalog = CatalogFixture::new().with_records(2).build();
        catalog.save(&InMemoryStore::new()).unwrap();
        let before = catalog.entries().to_vec();

        assert!(catalog.remove(&Uuid::new_v4()).is_none());
        assert_eq!(catalog.entries(), before.as_slice());
        assert!(!catalog.is_dirty());
    }

    #[test]
    fn blank_search_is_invalid() {
        let catalog = ivanov_petrov();
        let err = catalog.search(&SearchQuery::new("", "")).unwrap_err();
        assert!(matches!(err, ArtdbError::InvalidQuery));
    }

    #[test]
    fn author_search_returns_author_matches_only() {
        let catalog = ivanov_petrov();
        let hits = catalog.search(&SearchQuery::new("ivan", "")).unwrap();
        assert_eq!(authors(&hits), vec!["Ivanov"]);
    }

    #[test]
    fn compat_title_search_returns_everything() {
        let catalog = ivanov_petrov();
        let hits = catalog.search(&SearchQuery::new("", "y")).unwrap();
        assert_eq!(authors(&hits), vec!["Ivanov", "Petrov"]);
    }

    #[test]
    fn skip_blank_title_search_filters() {
        let catalog = ivanov_petrov();
        let query = SearchQuery::new("", "y").with_mode(SearchMode::SkipBlank);
        let hits = catalog.search(&query).unwrap();
        assert_eq!(authors(&hits), vec!["Petrov"]);
    }

    #[test]
    fn search_preserves_catalog_order() {
        let catalog = CatalogFixture::new()
            .with_record("Smith B", "1")
            .with_record("Jones", "2")
            .with_record("smith a", "3")
            .build();
        let hits = catalog.search(&SearchQuery::new("Smith", "")).unwrap();
        assert_eq!(authors(&hits), vec!["Smith B", "smith a"]);
    }

    #[test]
    fn search_positions_point_into_the_catalog() {
        let catalog = CatalogFixture::new()
            .with_record("Smith B", "1")
            .with_record("Jones", "2")
            .with_record("smith a", "3")
            .build();
        let hits = catalog.search_positions(&SearchQuery::new("smith", "")).unwrap();
        let positions: Vec<usize> = hits.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(hits[1].1.id(), catalog.entries()[2].id());
    }

    #[test]
    fn search_is_repeatable_and_non_mutating() {
        let catalog = ivanov_petrov();
        let query = SearchQuery::new("petr", "");
        let first: Vec<_> = catalog.search(&query).unwrap().into_iter().cloned().collect();
        let second: Vec<_> = catalog.search(&query).unwrap().into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(catalog.reset_search().len(), 2);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemoryStore::new();
        let mut catalog = CatalogFixture::new().with_records(5).build();
        catalog.save(&store).unwrap();
        assert!(!catalog.is_dirty());

        let loaded = Catalog::load(&store).unwrap();
        assert_eq!(loaded.entries(), catalog.entries());
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn load_from_empty_store_fails_with_missing() {
        let err = Catalog::load(&InMemoryStore::new()).unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn failed_save_keeps_catalog_dirty() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut catalog = CatalogFixture::new().with_records(1).build();

        assert!(catalog.save(&store).is_err());
        assert!(catalog.is_dirty());
        assert!(!store.has_snapshot());
    }
}
