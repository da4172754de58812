//! # Command Layer
//!
//! One module per operation. Each `run` takes the catalog (and whatever else
//! it needs) as plain Rust values and returns a [`CmdResult`]; nothing here
//! prints or exits.

use crate::config::ArtdbConfig;
use crate::error::{ArtdbError, Result};
use crate::index::{DisplayRecord, RecordSelector};
use crate::model::{Entry, RecordPatch};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod search;
pub mod update;
pub mod view;

/// Filesystem locations used by one session.
#[derive(Debug, Clone)]
pub struct ArtdbPaths {
    pub data_dir: PathBuf,
    pub snapshot: PathBuf,
}

impl ArtdbPaths {
    pub fn new(data_dir: PathBuf, snapshot: PathBuf) -> Self {
        Self { data_dir, snapshot }
    }

    pub fn config_file(&self) -> PathBuf {
        ArtdbConfig::config_path(&self.data_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Entry>,
    pub listed_records: Vec<DisplayRecord>,
    pub export_path: Option<PathBuf>,
    pub config: Option<ArtdbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Entry>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: ArtdbConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// An edit of one record: which record, and which fields change.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub selector: RecordSelector,
    pub patch: RecordPatch,
}

impl RecordUpdate {
    pub fn new(selector: RecordSelector, patch: RecordPatch) -> Result<Self> {
        if patch.is_empty() {
            return Err(ArtdbError::Api(format!(
                "Nothing to change for record {}",
                selector
            )));
        }
        Ok(Self { selector, patch })
    }
}
