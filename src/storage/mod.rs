//! Catalog persistence
//!
//! Saves and loads a whole catalog tree to a single file inside one storage
//! directory. File names come from users and are sanitised first, so a
//! catalog can never be written outside that directory.
//!
//! Decoding runs every item through its constructor again, so a file that
//! parses but breaks a catalog invariant is reported as unreadable. Trees
//! deeper than [`MAX_NESTING_DEPTH`] are refused in both directions.

mod error;
mod sanitize;

pub use error::{StorageCause, StorageError};
pub use sanitize::sanitize_filename;

use bincode::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::catalog::{Collection, MAX_NESTING_DEPTH};

/// Upper bound on a decoded binary catalog
const MAX_CATALOG_BYTES: u64 = 64 * 1024 * 1024;

/// On-disk encoding of a catalog file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Compact bincode blob
    #[default]
    Binary,
    /// Pretty-printed JSON
    Json,
}

impl StorageFormat {
    fn encode(self, catalog: &Collection) -> Result<Vec<u8>, StorageCause> {
        match self {
            StorageFormat::Binary => Ok(binary_options().serialize(catalog)?),
            StorageFormat::Json => Ok(serde_json::to_vec_pretty(catalog)?),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<Collection, StorageCause> {
        match self {
            StorageFormat::Binary => Ok(binary_options().deserialize(bytes)?),
            StorageFormat::Json => Ok(serde_json::from_slice(bytes)?),
        }
    }
}

fn binary_options() -> impl Options {
    bincode::options().with_limit(MAX_CATALOG_BYTES)
}

fn check_depth(catalog: &Collection) -> Result<(), StorageCause> {
    let depth = catalog.depth();
    if depth > MAX_NESTING_DEPTH {
        return Err(StorageCause::TooDeep {
            depth,
            max: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}

/// Reads and writes catalog files in a single directory
#[derive(Debug, Clone)]
pub struct CatalogStorage {
    base_dir: PathBuf,
    format: StorageFormat,
}

impl CatalogStorage {
    pub fn new(base_dir: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            base_dir: base_dir.into(),
            format,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Where `name` would be stored after sanitising
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        Ok(self.base_dir.join(sanitize_filename(name)?))
    }

    /// Whether a catalog file called `name` exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|path| path.is_file()).unwrap_or(false)
    }

    /// Write `catalog` to `name`, replacing any previous file
    ///
    /// The data is written to a temporary sibling first and renamed into
    /// place, so a failed save leaves the old file intact.
    pub fn save(&self, catalog: &Collection, name: &str) -> Result<PathBuf, StorageError> {
        let file = sanitize_filename(name)?;
        let path = self.base_dir.join(&file);
        let staging = self.base_dir.join(format!(".{file}.tmp"));

        let result = check_depth(catalog)
            .and_then(|()| self.format.encode(catalog))
            .and_then(|bytes| {
                fs::write(&staging, bytes)?;
                fs::rename(&staging, &path)?;
                Ok(())
            });

        match result {
            Ok(()) => {
                info!(path = %path.display(), format = ?self.format, "Catalog saved");
                Ok(path)
            }
            Err(cause) => {
                error!(path = %path.display(), error = %cause, "Failed to save catalog");
                // Best effort; the staging file may never have been created
                let _ = fs::remove_file(&staging);
                Err(StorageError::Save {
                    file,
                    source: cause,
                })
            }
        }
    }

    /// Read the catalog stored under `name`
    pub fn load(&self, name: &str) -> Result<Collection, StorageError> {
        let file = sanitize_filename(name)?;
        let path = self.base_dir.join(&file);

        let result = fs::read(&path)
            .map_err(StorageCause::from)
            .and_then(|bytes| self.format.decode(&bytes));

        match result {
            Ok(catalog) => {
                info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
                Ok(catalog)
            }
            Err(cause) => {
                error!(path = %path.display(), error = %cause, "Failed to load catalog");
                Err(StorageError::Load {
                    file,
                    source: cause,
                })
            }
        }
    }
}
