use super::{decode, encode, SnapshotStore};
use crate::error::PersistenceError;
use crate::model::Entry;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "memory://articles.dat";

/// In-memory snapshot storage for testing.
///
/// Keeps the encoded bytes rather than the entries so tests exercise the same
/// encoding path as [`super::fs::FileStore`]. Uses `RefCell` because the trait
/// takes `&self` and artdb is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: RefCell<Option<Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `entries`.
    pub fn with_entries(entries: &[Entry]) -> Result<Self, PersistenceError> {
        let store = Self::new();
        store.save(entries)?;
        Ok(store)
    }

    /// Replace the stored bytes directly, e.g. to simulate a corrupt snapshot.
    pub fn set_raw(&self, bytes: Vec<u8>) {
        *self.snapshot.borrow_mut() = Some(bytes);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.borrow().is_some()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>, PersistenceError> {
        let snapshot = self.snapshot.borrow();
        match snapshot.as_deref() {
            Some(bytes) => decode(bytes, &self.location()),
            None => Err(PersistenceError::Missing(self.location())),
        }
    }

    fn save(&self, entries: &[Entry]) -> Result<(), PersistenceError> {
        if *self.simulate_write_error.borrow() {
            return Err(PersistenceError::Write {
                path: self.location(),
                source: io::Error::other("Simulated write error"),
            });
        }
        let bytes = encode(entries)?;
        *self.snapshot.borrow_mut() = Some(bytes);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_LOCATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn empty_store_reports_missing() {
        let store = InMemoryStore::new();
        assert!(!store.has_snapshot());
        assert!(store.load().unwrap_err().is_missing());
    }

    #[test]
    fn round_trips_through_encoding() {
        let entries = vec![
            Entry::new(Record::new("A", "B", "C", "D", "2020-01-01", "E")),
            Entry::new(Record::new("A", "B", "C", "D", "2020-01-01", "E")),
        ];
        let store = InMemoryStore::with_entries(&entries).unwrap();
        assert!(store.has_snapshot());
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn simulated_write_error_keeps_previous_snapshot() {
        let first = vec![Entry::new(Record::new("A", "", "", "", "", ""))];
        let store = InMemoryStore::with_entries(&first).unwrap();
        store.set_simulate_write_error(true);

        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
        assert_eq!(store.load().unwrap(), first);
    }

    #[test]
    fn truncated_snapshot_fails_to_decode() {
        let entries = vec![Entry::new(Record::new("A", "B", "C", "D", "E", "F"))];
        let bytes = encode(&entries).unwrap();
        let store = InMemoryStore::new();
        store.set_raw(bytes[..bytes.len() / 2].to_vec());
        assert!(matches!(
            store.load().unwrap_err(),
            PersistenceError::Decode { .. }
        ));
    }
}
