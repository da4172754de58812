use super::{decode, encode, SnapshotStore};
use crate::error::PersistenceError;
use crate::model::Entry;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_SNAPSHOT_FILE: &str = "articles.dat";

/// Snapshot stored in a single file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the default file name inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Write {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent(&self) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_FILE.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let entries = decode(&bytes, &self.path)?;
        tracing::debug!(
            "Loaded {} record(s) from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<(), PersistenceError> {
        let bytes = encode(entries)?;
        self.ensure_parent()?;

        // Write to a sibling temp file, then rename over the target.
        let tmp = self.tmp_path();
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_err(e));
        }

        tracing::debug!(
            "Saved {} record(s) to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
