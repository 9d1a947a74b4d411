//! Error types for ghasum-sumfile

/// Result type for ledger codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classes of ledger errors.
///
/// Callers branch on the class rather than on individual variants, e.g. a
/// forced update tolerates [`ErrorKind::Headers`] and [`ErrorKind::Version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed line structure or forbidden characters
    Syntax,
    /// Malformed or repeated header lines
    Headers,
    /// Absent, non-numeric or unsupported version
    Version,
    /// Two entries share the same ID
    Duplicate,
    /// An entry has an empty ID part or checksum
    Missing,
}

/// Errors that can occur while encoding or decoding a ledger
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("syntax error: missing final newline")]
    MissingFinalNewline,

    #[error("syntax error on line {line}")]
    MalformedEntry { line: usize },

    #[error("syntax error: {id:?} contains a forbidden character")]
    ForbiddenCharacter { id: String },

    #[error("invalid header on line {line}")]
    InvalidHeader { line: usize },

    #[error("duplicate header {key:?} on line {line}")]
    DuplicateHeader { key: String, line: usize },

    #[error("version not found")]
    VersionNotFound,

    #[error("version {value:?} is not a positive number")]
    VersionNotNumeric { value: String },

    #[error("unknown version {0}")]
    UnknownVersion(u32),

    #[error("duplicate entry for {id:?}")]
    DuplicateEntry { id: String },

    #[error("missing id or checksum in entry {id:?}")]
    MissingField { id: String },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFinalNewline
            | Self::MalformedEntry { .. }
            | Self::ForbiddenCharacter { .. } => ErrorKind::Syntax,
            Self::InvalidHeader { .. } | Self::DuplicateHeader { .. } => ErrorKind::Headers,
            Self::VersionNotFound | Self::VersionNotNumeric { .. } | Self::UnknownVersion(_) => {
                ErrorKind::Version
            }
            Self::DuplicateEntry { .. } => ErrorKind::Duplicate,
            Self::MissingField { .. } => ErrorKind::Missing,
        }
    }
}
