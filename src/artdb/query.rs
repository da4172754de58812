//! Two-field substring search.
//!
//! A query carries an author term and a title term. Matching is a
//! case-insensitive substring test on each field, and a record matches when
//! either clause does.
//!
//! How a blank term is treated is controlled by [`SearchMode`]:
//!
//! - [`SearchMode::Compat`] keeps the long-standing behaviour: the author
//!   clause is always evaluated, so an empty author term matches every record
//!   and a title-only search returns the whole catalogue. A blank title term
//!   never matches on its own.
//! - [`SearchMode::SkipBlank`] ignores whichever clause is blank.
//!
//! Both modes reject a query whose terms are both blank.

use crate::error::{ArtdbError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    #[default]
    Compat,
    SkipBlank,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Compat => write!(f, "compat"),
            SearchMode::SkipBlank => write!(f, "skip-blank"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compat" => Ok(SearchMode::Compat),
            "skip-blank" | "skip_blank" => Ok(SearchMode::SkipBlank),
            other => Err(format!(
                "Invalid search mode '{}' (expected compat or skip-blank)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    author: String,
    title: String,
    mode: SearchMode,
}

impl SearchQuery {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            mode: SearchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.author) && is_blank(&self.title) {
            return Err(ArtdbError::InvalidQuery);
        }
        Ok(())
    }

    /// Tests a record against the query. Callers are expected to have validated it.
    pub fn matches(&self, record: &Record) -> bool {
        let author_hit = contains_ci(record.author(), &self.author);
        let title_hit = !is_blank(&self.title) && contains_ci(record.title(), &self.title);

        match self.mode {
            SearchMode::Compat => author_hit || title_hit,
            SearchMode::SkipBlank => (!is_blank(&self.author) && author_hit) || title_hit,
        }
    }
}

fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
