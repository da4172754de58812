//! # Artdb Architecture
//!
//! Artdb is a small catalogue of bibliographic article records: author, title,
//! keywords, summary, date and UDC code. It is a library first; the `artdb`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One session: load on open, save on close if changed      │
//! │  - Normalizes inputs (index strings → selectors)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over Catalog (catalog.rs)    │
//! │  - Add, update, remove, search, export                      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait, one binary snapshot per catalogue   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Every record gets a UUID when it is added. Updates and removals go by that
//! id, so two records with identical fields are still distinct. The CLI shows
//! 1-based positions instead; see [`index`].
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints and never exits. Progress and
//! failures that are not part of a command's result go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade
//! - [`catalog`]: The in-memory collection and its search
//! - [`commands`]: One module per operation
//! - [`store`]: Snapshot persistence
//! - [`model`]: `Record`, `RecordPatch`, `Entry`
//! - [`query`]: Search terms and how blanks are treated
//! - [`index`]: Display positions and selector parsing
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod store;
