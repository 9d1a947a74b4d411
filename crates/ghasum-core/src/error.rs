//! Error types for ghasum-core

use std::path::PathBuf;

/// Result type for ghasum-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghasum-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A ledger already exists where one would be created
    #[error("ghasum is already initialized ({path} exists)")]
    AlreadyInitialized { path: PathBuf },

    /// No ledger exists where one is expected
    #[error("ghasum is not initialized ({path} not found)")]
    NotInitialized { path: PathBuf },

    /// Offline verification needs an action that is not cached
    #[error("{action} is not in the cache ({path}) and cloning is disabled")]
    NotCached { action: String, path: PathBuf },

    #[error("Could not create ledger: {0}")]
    SumfileCreate(#[source] ghasum_fs::Error),

    #[error("Could not open ledger: {0}")]
    SumfileOpen(#[source] ghasum_fs::Error),

    #[error("Could not read ledger: {0}")]
    SumfileRead(#[source] ghasum_fs::Error),

    #[error("Could not write ledger: {0}")]
    SumfileWrite(#[source] ghasum_fs::Error),

    #[error("Could not decode ledger {path}: {source}")]
    SumfileDecode {
        path: PathBuf,
        #[source]
        source: ghasum_sumfile::Error,
    },

    #[error("Could not encode ledger: {0}")]
    SumfileEncode(#[source] ghasum_sumfile::Error),

    #[error("Could not clone {action}: {source}")]
    Clone {
        action: String,
        #[source]
        source: ghasum_git::Error,
    },

    #[error("Could not compute checksum for {action}: {source}")]
    Checksum {
        action: String,
        #[source]
        source: ghasum_fs::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Workflow discovery or `uses` parsing failed
    #[error(transparent)]
    Gha(#[from] ghasum_gha::Error),

    /// Cache setup failed
    #[error(transparent)]
    Cache(#[from] ghasum_cache::Error),
}
