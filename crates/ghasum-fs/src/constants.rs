//! Well-known paths inside a repository that ghasum operates on.

use std::path::Path;

/// Repository paths ghasum reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhasumPath {
    /// The `.github/workflows` directory holding workflow definitions
    WorkflowsDir,
    /// The ledger file, `.github/workflows/gha.sum`
    SumFile,
    /// The `.git` directory stripped from cloned dependencies
    GitDir,
}

impl GhasumPath {
    /// Get the string representation of the path, relative to a repository root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkflowsDir => ".github/workflows",
            Self::SumFile => ".github/workflows/gha.sum",
            Self::GitDir => ".git",
        }
    }

    /// Resolve this path against a repository root.
    pub fn under(&self, root: &Path) -> std::path::PathBuf {
        root.join(self.as_str())
    }
}

impl AsRef<Path> for GhasumPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for GhasumPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
