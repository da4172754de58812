use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or write the catalogue snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("No snapshot at {}", .0.display())]
    Missing(PathBuf),

    #[error("Could not read snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write snapshot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Snapshot {} could not be decoded: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: bitcode::Error,
    },

    #[error("Could not encode snapshot: {0}")]
    Encode(#[source] bitcode::Error),
}

impl PersistenceError {
    /// True when the snapshot simply does not exist yet (first run).
    pub fn is_missing(&self) -> bool {
        matches!(self, PersistenceError::Missing(_))
    }
}

#[derive(Error, Debug)]
pub enum ArtdbError {
    #[error("Enter at least one search term (author or title)")]
    InvalidQuery,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not write export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ArtdbError>;
