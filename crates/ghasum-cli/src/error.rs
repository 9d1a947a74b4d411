//! Error types for ghasum-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for unexpected errors.
pub const EXIT_ERROR: u8 = 1;
/// Exit code for invalid usage.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when verification found problems.
pub const EXIT_PROBLEMS: u8 = 3;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ghasum-core
    #[error(transparent)]
    Core(#[from] ghasum_core::Error),

    /// Error from ghasum-cache
    #[error("{0} (using --cache or --no-cache may avoid this error)")]
    Cache(#[from] ghasum_cache::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// Invalid arguments
    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => EXIT_USAGE,
            _ => EXIT_ERROR,
        }
    }
}
