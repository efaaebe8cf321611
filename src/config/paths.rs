use crate::{BookshelfError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Settings file name, both in the working directory and the config dir
pub const SETTINGS_FILE: &str = "bookshelf.yaml";

/// Locations of Bookshelf configuration files
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Per-user configuration directory
    pub config_dir: PathBuf,
}

impl BookshelfPaths {
    /// Resolve the platform's per-user configuration directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            BookshelfError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Paths rooted at an explicit directory
    pub fn for_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Per-user settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Settings files to try, most specific first
    pub fn candidates(&self, working_dir: &Path) -> Vec<PathBuf> {
        vec![working_dir.join(SETTINGS_FILE), self.settings_file()]
    }
}
