//! # API Facade
//!
//! The single entry point for catalogue operations, whatever the UI.
//!
//! An [`ArtdbApi`] is one session. [`ArtdbApi::open`] loads the snapshot and
//! falls back to an empty catalogue if that fails. A missing snapshot is
//! normal on first run; anything else is logged as a warning. The methods in
//! between dispatch to `commands/*.rs`. [`ArtdbApi::close`] writes the
//! snapshot back when the catalogue changed.
//!
//! The facade:
//! - **Dispatches** to the command functions
//! - **Normalizes inputs** (CLI strings → selectors, search terms → queries with
//!   the configured search mode)
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `ArtdbApi<S: SnapshotStore>` is generic over where the snapshot lives:
//! `ArtdbApi<FileStore>` in production, `ArtdbApi<InMemoryStore>` in tests.

use crate::catalog::Catalog;
use crate::commands;
use crate::config::ArtdbConfig;
use crate::error::{ArtdbError, Result};
use crate::index::{self, RecordSelector};
use crate::model::{Record, RecordPatch};
use crate::query::SearchQuery;
use crate::store::SnapshotStore;
use std::path::Path;

pub struct ArtdbApi<S: SnapshotStore> {
    store: S,
    catalog: Catalog,
    config: ArtdbConfig,
    paths: commands::ArtdbPaths,
}

impl<S: SnapshotStore> ArtdbApi<S> {
    /// Starts a session, loading whatever snapshot `store` holds.
    pub fn open(store: S, config: ArtdbConfig, paths: commands::ArtdbPaths) -> Self {
        let catalog = match Catalog::load(&store) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} record(s) from {}",
                    catalog.len(),
                    store.location().display()
                );
                catalog
            }
            Err(e) if e.is_missing() => {
                tracing::info!("{}; starting with an empty catalogue", e);
                Catalog::new()
            }
            Err(e) => {
                tracing::warn!("{}; starting with an empty catalogue", e);
                Catalog::new()
            }
        };

        Self {
            store,
            catalog,
            config,
            paths,
        }
    }

    /// Read access to the live collection.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ArtdbConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::ArtdbPaths {
        &self.paths
    }

    /// A search query using the configured search mode.
    pub fn query(&self, author: &str, title: &str) -> SearchQuery {
        SearchQuery::new(author, title).with_mode(self.config.search_mode)
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, record)
    }

    pub fn update_records(
        &mut self,
        updates: &[commands::RecordUpdate],
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, updates)
    }

    /// Replaces the record selected by `input` with `patch` applied to it.
    pub fn edit_record(&mut self, input: &str, patch: RecordPatch) -> Result<commands::CmdResult> {
        let mut selectors = parse_selectors(&[input])?;
        if selectors.len() != 1 {
            return Err(ArtdbError::Api(format!(
                "Edit takes a single record, got {}",
                input
            )));
        }
        let update = commands::RecordUpdate::new(selectors.remove(0), patch)?;
        self.update_records(&[update])
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.catalog, &selectors)
    }

    pub fn view_records<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.catalog, &selectors)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search_records(&self, author: &str, title: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.catalog, &self.query(author, title))
    }

    pub fn export_records(
        &self,
        selection: &ExportSelection,
        output: &Path,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.catalog, selection, output)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn show_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths)
    }

    /// Writes the full catalogue now, whether or not it changed.
    pub fn save(&mut self) -> Result<()> {
        self.catalog.save(&self.store)?;
        tracing::info!(
            "Saved {} record(s) to {}",
            self.catalog.len(),
            self.store.location().display()
        );
        Ok(())
    }

    /// Ends the session, writing the snapshot if anything changed.
    pub fn close(mut self) -> Result<()> {
        if !self.catalog.is_dirty() {
            tracing::debug!("Catalogue unchanged, snapshot not rewritten");
            return Ok(());
        }
        self.save().inspect_err(|e| tracing::error!("Saving the catalogue failed: {}", e))
    }

    /// Gives the store back, e.g. to reopen it in tests.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Parses CLI selector strings (indexes, ranges, id prefixes).
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    index::parse_selectors(inputs).map_err(ArtdbError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::{default_filename, ExportSelection};
pub use commands::{ArtdbPaths, CmdMessage, CmdResult, MessageLevel, RecordUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crate::query::SearchMode;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn paths() -> ArtdbPaths {
        ArtdbPaths::new(PathBuf::from("/tmp/artdb"), PathBuf::from("memory://articles.dat"))
    }

    fn open(store: InMemoryStore) -> ArtdbApi<InMemoryStore> {
        ArtdbApi::open(store, ArtdbConfig::default(), paths())
    }

    fn record(author: &str, title: &str) -> Record {
        Record::new(author, title, "", "", "2024-02-29", "")
    }

    #[test]
    fn missing_snapshot_opens_empty() {
        let api = open(InMemoryStore::new());
        assert!(api.catalog().is_empty());
    }

    #[test]
    fn corrupt_snapshot_opens_empty() {
        let store = InMemoryStore::new();
        store.set_raw(vec![1, 2, 3]);
        let api = open(store);
        assert!(api.catalog().is_empty());
    }

    #[test]
    fn changes_survive_save_and_reopen() {
        let mut api = open(InMemoryStore::new());
        api.add_record(record("Ivanov", "X")).unwrap();
        api.add_record(record("Petrov", "Y")).unwrap();
        api.delete_records(&["1"]).unwrap();
        let expected: Vec<Entry> = api.catalog().entries().to_vec();

        api.save().unwrap();
        let reopened = open(api.into_store());
        assert_eq!(reopened.catalog().entries(), expected.as_slice());
    }

    #[test]
    fn close_skips_write_when_unchanged() {
        let store = InMemoryStore::new();
        // Any write attempt would fail, so a clean close proves nothing was written.
        store.set_simulate_write_error(true);
        let api = open(store);
        api.list_records().unwrap();
        api.close().unwrap();
    }

    #[test]
    fn close_reports_save_failure() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut api = open(store);
        api.add_record(record("A", "B")).unwrap();

        let err = api.close().unwrap_err();
        assert!(matches!(err, ArtdbError::Persistence(_)));
    }

    #[test]
    fn close_writes_file_snapshot_when_changed() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("articles.dat");
        let file_paths = ArtdbPaths::new(dir.path().to_path_buf(), snapshot.clone());

        let mut api = ArtdbApi::open(
            FileStore::new(&snapshot),
            ArtdbConfig::default(),
            file_paths.clone(),
        );
        api.add_record(record("Ivanov", "X")).unwrap();
        api.close().unwrap();

        let reopened = ArtdbApi::open(FileStore::new(&snapshot), ArtdbConfig::default(), file_paths);
        assert_eq!(reopened.catalog().len(), 1);
        assert_eq!(reopened.catalog().entries()[0].record.author(), "Ivanov");
    }

    #[test]
    fn search_uses_configured_mode() {
        let mut config = ArtdbConfig::default();
        let mut api = ArtdbApi::open(InMemoryStore::new(), config.clone(), paths());
        api.add_record(record("Ivanov", "X")).unwrap();
        api.add_record(record("Petrov", "Y")).unwrap();
        assert_eq!(api.search_records("", "y").unwrap().listed_records.len(), 2);

        config.search_mode = SearchMode::SkipBlank;
        let mut strict = ArtdbApi::open(InMemoryStore::new(), config, paths());
        strict.add_record(record("Ivanov", "X")).unwrap();
        strict.add_record(record("Petrov", "Y")).unwrap();
        let hits = strict.search_records("", "y").unwrap().listed_records;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.record.author(), "Petrov");
    }

    #[test]
    fn edit_record_patches_one_record() {
        let mut api = open(InMemoryStore::new());
        api.add_record(record("Ivanov", "X")).unwrap();
        let patch = RecordPatch {
            keywords: Some("udc, library".into()),
            ..Default::default()
        };
        api.edit_record("1", patch).unwrap();
        assert_eq!(api.catalog().entries()[0].record.keywords(), "udc, library");
    }

    #[test]
    fn edit_record_rejects_ranges() {
        let mut api = open(InMemoryStore::new());
        api.add_record(record("A", "1")).unwrap();
        api.add_record(record("B", "2")).unwrap();
        let patch = RecordPatch {
            title: Some("t".into()),
            ..Default::default()
        };
        assert!(api.edit_record("1-2", patch).is_err());
    }

    #[test]
    fn bad_selector_is_an_api_error() {
        let mut api = open(InMemoryStore::new());
        let err = api.delete_records(&["not-an-index!"]).unwrap_err();
        assert!(matches!(err, ArtdbError::Api(_)));
    }
}
