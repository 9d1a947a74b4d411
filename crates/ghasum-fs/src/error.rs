//! Error types for ghasum-fs

use std::path::PathBuf;

/// Result type for ghasum-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghasum-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Cannot checksum file with newline in its name: {path:?}")]
    InvalidFileName { path: String },

    #[error("Failed to walk {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
