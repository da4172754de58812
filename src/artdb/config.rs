//! # Configuration
//!
//! Stored as `config.json` in the data directory. Missing file or missing keys
//! fall back to defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `articles.dat` | Snapshot file, relative to the data directory or absolute |
//! | `search-mode` | `compat` | How blank search terms are treated (`compat` or `skip-blank`) |

use crate::error::{ArtdbError, Result};
use crate::query::SearchMode;
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 2] = ["data-file", "search-mode"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ArtdbConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub search_mode: SearchMode,
}

fn default_data_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

impl Default for ArtdbConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            search_mode: SearchMode::default(),
        }
    }
}

impl ArtdbConfig {
    pub fn config_path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::config_path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ArtdbConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path(config_dir), content)?;
        Ok(())
    }

    /// Snapshot path, resolving a relative `data-file` against `data_dir`.
    pub fn snapshot_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "search-mode" => Some(self.search_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ArtdbError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "search-mode" => {
                self.search_mode = value.parse().map_err(ArtdbError::Config)?;
            }
            other => {
                return Err(ArtdbError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArtdbConfig::default();
        assert_eq!(config.data_file, "articles.dat");
        assert_eq!(config.search_mode, SearchMode::Compat);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ArtdbConfig::load(dir.path()).unwrap();
        assert_eq!(config, ArtdbConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = ArtdbConfig::default();
        config.set("search-mode", "skip-blank").unwrap();
        config.set("data-file", "fond.dat").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ArtdbConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.search_mode, SearchMode::SkipBlank);
        assert_eq!(loaded.data_file, "fond.dat");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            ArtdbConfig::config_path(dir.path()),
            r#"{ "search-mode": "skip-blank" }"#,
        )
        .unwrap();

        let loaded = ArtdbConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "articles.dat");
        assert_eq!(loaded.search_mode, SearchMode::SkipBlank);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(ArtdbConfig::config_path(dir.path()), "{ nope").unwrap();
        assert!(matches!(
            ArtdbConfig::load(dir.path()),
            Err(ArtdbError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = ArtdbConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("search-mode", "fuzzy").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert_eq!(config, ArtdbConfig::default());
    }

    #[test]
    fn test_snapshot_path_resolution() {
        let dir = Path::new("/data/artdb");
        let mut config = ArtdbConfig::default();
        assert_eq!(config.snapshot_path(dir), dir.join("articles.dat"));

        let absolute = std::env::temp_dir().join("elsewhere.dat");
        config.data_file = absolute.to_string_lossy().into_owned();
        assert_eq!(config.snapshot_path(dir), absolute);
    }

    #[test]
    fn test_get_known_keys() {
        let config = ArtdbConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some());
        }
        assert!(config.get("nope").is_none());
    }
}
