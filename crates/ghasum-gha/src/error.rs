//! Error types for ghasum-gha

use std::path::PathBuf;

/// Result type for ghasum-gha operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving workflow actions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read workflow at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse workflow {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid uses value {uses:?}: {reason}")]
    InvalidUses { uses: String, reason: &'static str },

    #[error("Job {job:?} not found in workflow {workflow:?}")]
    JobNotFound { job: String, workflow: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
