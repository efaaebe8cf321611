//! Storage error types
//!
//! Display text is what the user sees. The underlying cause is reachable
//! through `source()` and is logged, never printed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested file name was empty or unusable after sanitising
    #[error("Invalid file name: {reason}")]
    InvalidName { reason: &'static str },

    #[error("Unable to save the catalog to '{file}'")]
    Save {
        file: String,
        #[source]
        source: StorageCause,
    },

    #[error("Unable to load the catalog from '{file}'")]
    Load {
        file: String,
        #[source]
        source: StorageCause,
    },
}

/// Lower-level failure behind a [`StorageError`]
#[derive(Error, Debug)]
pub enum StorageCause {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary codec failure: {0}")]
    Binary(#[from] bincode::Error),

    #[error("JSON codec failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog nests {depth} collections deep, the limit is {max}")]
    TooDeep { depth: usize, max: usize },
}
