//! # Storage Layer
//!
//! The catalogue is persisted as a single snapshot: the whole ordered list of
//! entries is written at once and read back at once. There is no append log and
//! no per-record file. The [`SnapshotStore`] trait hides where the bytes live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one binary file on disk
//!   (`articles.dat` by default), encoded with `bitcode`.
//! - [`memory::InMemoryStore`]: keeps the encoded snapshot in memory, for tests.
//!
//! ## Snapshot Format
//!
//! The snapshot is the `bitcode` encoding of `Vec<Entry>`. It is opaque: only a
//! round trip through the same build is guaranteed to reproduce the list.
//! Both implementations go through [`encode`] and [`decode`] so they agree on
//! the bytes.

use crate::error::PersistenceError;
use crate::model::Entry;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Whole-snapshot persistence for the catalogue.
pub trait SnapshotStore {
    /// Read the full snapshot.
    ///
    /// Fails with [`PersistenceError::Missing`] when nothing has been saved yet.
    fn load(&self) -> Result<Vec<Entry>, PersistenceError>;

    /// Overwrite the snapshot with `entries`.
    fn save(&self, entries: &[Entry]) -> Result<(), PersistenceError>;

    /// Where the snapshot lives (a virtual path for non-file stores).
    fn location(&self) -> PathBuf;
}

pub(crate) fn encode(entries: &[Entry]) -> Result<Vec<u8>, PersistenceError> {
    bitcode::serialize(entries).map_err(PersistenceError::Encode)
}

pub(crate) fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Entry>, PersistenceError> {
    bitcode::deserialize(bytes).map_err(|source| PersistenceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
