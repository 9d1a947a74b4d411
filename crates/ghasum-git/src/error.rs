//! Error types for ghasum-git

use std::path::PathBuf;

use crate::RefKind;

/// Result type for ghasum-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while cloning an action repository
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] ghasum_fs::Error),

    #[error("Could not prepare clone directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ref {reference:?} is not a commit hash")]
    NotACommit { reference: String },

    #[error("Could not find ref {reference:?} in {url}: {}", render_attempts(.attempts))]
    RefNotFound {
        url: String,
        reference: String,
        attempts: Vec<(RefKind, String)>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn render_attempts(attempts: &[(RefKind, String)]) -> String {
    attempts
        .iter()
        .map(|(kind, reason)| format!("as {kind}: {reason}"))
        .collect::<Vec<_>>()
        .join("; ")
}
