//! # Display Indexes
//!
//! Entries are identified internally by UUID, which is stable but unpleasant to
//! type. The CLI refers to records by their 1-based position in the catalogue
//! instead (`1`, `2`, ...), and accepts ranges such as `3-5`.
//!
//! A display index is always the position in the *full* catalogue, also when
//! records are shown as search results. `artdb search --author smith` may print
//! `2.` and `7.`, and `artdb edit 7` then edits the second hit.
//!
//! Indexes are resolved to UUIDs before any mutation happens, so deleting
//! several records in one call removes exactly the ones that were listed.
//!
//! A selector may also be an id prefix (at least [`MIN_ID_PREFIX`] hex digits),
//! as printed by `artdb view`.

use crate::model::Entry;
use std::fmt;
use std::str::FromStr;

pub const MIN_ID_PREFIX: usize = 4;

/// Most indexes a single range may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

/// 1-based position of an entry in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    /// Zero-based offset into the catalogue.
    pub fn offset(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// Parses a single index ("3") or an inclusive range ("3-5").
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if !start.is_empty() {
            let start = DisplayIndex::from_str(start)?;
            let end = DisplayIndex::from_str(end)?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            if end.0 - start.0 >= MAX_RANGE_LEN {
                return Err(format!(
                    "Range {} is too large (at most {} records)",
                    s, MAX_RANGE_LEN
                ));
            }
            return Ok((start.0..=end.0).map(DisplayIndex).collect());
        }
    }
    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// A user input that selects one or more records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(DisplayIndex),
    IdPrefix(String),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(idx) => write!(f, "{}", idx),
            RecordSelector::IdPrefix(p) => write!(f, "{}", p),
        }
    }
}

/// Parses CLI inputs into selectors, expanding ranges.
///
/// Anything that is not an index or range must look like an id prefix.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>, String> {
    let mut selectors = Vec::new();
    for input in inputs {
        let input = input.as_ref().trim();
        match parse_index_or_range(input) {
            Ok(indexes) => selectors.extend(indexes.into_iter().map(RecordSelector::Index)),
            Err(index_err) => {
                if looks_like_id_prefix(input) {
                    selectors.push(RecordSelector::IdPrefix(input.to_lowercase()));
                } else {
                    return Err(index_err);
                }
            }
        }
    }
    Ok(selectors)
}

fn looks_like_id_prefix(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
        && s.chars().filter(char::is_ascii_hexdigit).count() >= MIN_ID_PREFIX
}

/// An entry paired with its catalogue position.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub entry: Entry,
    pub index: DisplayIndex,
}

/// Assigns display indexes to the full catalogue, in order.
pub fn index_entries(entries: &[Entry]) -> Vec<DisplayRecord> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| DisplayRecord {
            entry: entry.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}
