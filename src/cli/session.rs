//! The catalog handle a CLI run works against
//!
//! A [`Session`] owns the root collection plus the storage it came from.
//! Every command and the interactive shell receive it explicitly; there is
//! no process-wide catalog.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::catalog::{
    demo_catalog, CatalogStats, Collection, Cursor, Item, ItemFactory, DEMO_CATALOG_NAME,
};
use crate::config::Settings;
use crate::storage::{CatalogStorage, StorageError};
use crate::{BookshelfError, Result};

pub struct Session {
    catalog: Collection,
    storage: CatalogStorage,
    factory: ItemFactory,
    file: String,
    from_disk: bool,
}

impl Session {
    pub fn new(catalog: Collection, storage: CatalogStorage, file: impl Into<String>) -> Self {
        Self {
            catalog,
            storage,
            factory: ItemFactory::new(),
            file: file.into(),
            from_disk: false,
        }
    }

    /// Open the catalog file named in `settings` (or `file` when given)
    ///
    /// A missing file starts an empty catalog, or the demo catalog when
    /// `seed_demo` is set. A file that exists but cannot be read is an error.
    pub fn open(settings: &Settings, file: Option<&str>) -> Result<Self> {
        let storage = settings.storage();
        let file = file.unwrap_or(&settings.catalog_file).to_string();

        let from_disk = storage.exists(&file);
        let catalog = if from_disk {
            storage.load(&file)?
        } else if settings.seed_demo {
            debug!(file = %file, "No catalog file, starting from the demo catalog");
            demo_catalog()?
        } else {
            debug!(file = %file, "No catalog file, starting empty");
            Collection::new(DEMO_CATALOG_NAME)?
        };

        Ok(Self {
            from_disk,
            ..Self::new(catalog, storage, file)
        })
    }

    /// Start from an empty catalog without reading the file at all
    ///
    /// Used when the current file is about to be overwritten, so a corrupt
    /// file cannot block the command that replaces it.
    pub fn fresh(settings: &Settings, file: Option<&str>) -> Result<Self> {
        let storage = settings.storage();
        let file = file.unwrap_or(&settings.catalog_file).to_string();
        let from_disk = storage.exists(&file);

        Ok(Self {
            from_disk,
            ..Self::new(Collection::new(DEMO_CATALOG_NAME)?, storage, file)
        })
    }

    pub fn catalog(&self) -> &Collection {
        &self.catalog
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Whether the catalog was read from an existing file when opened
    pub fn from_disk(&self) -> bool {
        self.from_disk
    }

    /// Add `item` to the root, or to the top-level collection named `into`
    pub fn add(&mut self, item: Item, into: Option<&str>) -> Result<()> {
        let target = match into {
            Some(name) => self.catalog.collection_mut(name).ok_or_else(|| {
                BookshelfError::Cli(format!("no top-level collection named '{name}'"))
            })?,
            None => &mut self.catalog,
        };
        info!(collection = target.name(), kind = item.kind(), title = item.title(), "Item added");
        target.add_item(item);
        Ok(())
    }

    /// Remove the first entry titled `title` from the root or from `from`
    pub fn remove(&mut self, title: &str, from: Option<&str>) -> Result<Option<Item>> {
        let target = match from {
            Some(name) => self.catalog.collection_mut(name).ok_or_else(|| {
                BookshelfError::Cli(format!("no top-level collection named '{name}'"))
            })?,
            None => &mut self.catalog,
        };
        Ok(target.remove_by_title(title))
    }

    pub fn search(&self, term: &str) -> Vec<Item> {
        self.catalog.search(term)
    }

    pub fn cursor(&self) -> Cursor {
        self.catalog.cursor()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::of(&self.catalog)
    }

    /// Save to the session's own file
    pub fn save(&self) -> std::result::Result<PathBuf, StorageError> {
        self.storage.save(&self.catalog, &self.file)
    }

    /// Save to another file in the same storage directory
    pub fn save_as(&self, name: &str) -> std::result::Result<PathBuf, StorageError> {
        self.storage.save(&self.catalog, name)
    }

    /// Save `catalog` to the session's file and make it the current catalog
    pub fn replace_catalog(
        &mut self,
        catalog: Collection,
    ) -> std::result::Result<PathBuf, StorageError> {
        let path = self.storage.save(&catalog, &self.file)?;
        self.catalog = catalog;
        Ok(path)
    }

    /// Replace the catalog with the one stored under `name`
    ///
    /// On failure the current catalog is left exactly as it was.
    pub fn load(&mut self, name: &str) -> std::result::Result<(), StorageError> {
        let loaded = self.storage.load(name)?;
        self.catalog = loaded;
        Ok(())
    }
}
