//! Ledger entries

/// Delimiter between the parts of an entry ID.
pub(crate) const ID_SEPARATOR: char = '@';

/// A single `(id → checksum)` record.
///
/// The ID is an ordered list of parts; for GitHub Actions it is
/// `["owner/project", "ref"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry {
    /// Ordered ID parts. None may be empty or contain `@`, space or newline.
    pub id: Vec<String>,
    /// Checksum value. Must not be empty or contain space or newline.
    pub checksum: String,
}

impl Entry {
    pub fn new(id: Vec<String>, checksum: impl Into<String>) -> Self {
        Self {
            id,
            checksum: checksum.into(),
        }
    }

    /// The ID parts joined with `@`, e.g. `actions/checkout@v4`.
    pub fn key(&self) -> String {
        self.id.join(&ID_SEPARATOR.to_string())
    }

    /// The entry as a ledger line, including the trailing newline.
    pub(crate) fn render(&self) -> String {
        format!("{} {}\n", self.key(), self.checksum)
    }
}
