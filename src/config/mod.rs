//! Bookshelf settings
//!
//! Settings come from an optional YAML file:
//!
//! ```yaml
//! data_dir: ./catalogs
//! catalog_file: main.bin
//! format: binary      # or json
//! seed_demo: true
//! log_level: warn
//! ```
//!
//! Lookup order: the `--config` path if given, then `./bookshelf.yaml`, then
//! the per-user config directory. With no file, defaults apply.

mod paths;

pub use paths::{BookshelfPaths, SETTINGS_FILE};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::storage::{CatalogStorage, StorageFormat};
use crate::{BookshelfError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Directory catalog files are read from and written to
    pub data_dir: PathBuf,

    /// Catalog file used when no `--file` is given
    pub catalog_file: String,

    /// Encoding for catalog files
    pub format: StorageFormat,

    /// Start the interactive shell with the demo catalog when no file exists
    pub seed_demo: bool,

    /// Default log filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            catalog_file: "catalog.bin".to_string(),
            format: StorageFormat::Binary,
            seed_demo: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        serde_yaml_ng::from_str(content).context("Failed to parse settings YAML")
    }

    /// Load settings from a specific file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Resolve settings using the lookup order described above
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(BookshelfError::Config(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::from_path(path)?);
        }

        let working_dir = std::env::current_dir()?;
        let candidates = match BookshelfPaths::new() {
            Ok(paths) => paths.candidates(&working_dir),
            Err(_) => vec![working_dir.join(SETTINGS_FILE)],
        };

        for candidate in candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Loading settings");
                return Ok(Self::from_path(&candidate)?);
            }
        }

        debug!("No settings file found, using defaults");
        Ok(Self::default())
    }

    /// Storage configured from these settings
    pub fn storage(&self) -> CatalogStorage {
        CatalogStorage::new(&self.data_dir, self.format)
    }
}
