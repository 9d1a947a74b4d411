//! Error types for ghasum-cache

use std::path::PathBuf;

/// Result type for ghasum-cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing the cache
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not determine the home directory for the default cache location")]
    NoHomeDirectory,

    #[error("Could not create cache at {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not clear cache at {path}: {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: ghasum_fs::Error,
    },

    #[error("Cache eviction failed in {path}: {message}")]
    Evict { path: PathBuf, message: String },
}
