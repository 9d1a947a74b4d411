//! Differences between fresh checksums and the ledger

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use ghasum_sumfile::Entry;

/// One discrepancy found by [`verify`](crate::verify).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// A dependency in use has no ledger entry
    Missing { key: String },
    /// A dependency's content no longer matches its ledger entry
    Mismatch { key: String },
}

impl Problem {
    /// The `owner/project@ref` the problem is about.
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key } | Self::Mismatch { key } => key,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "no checksum found for {key:?}"),
            Self::Mismatch { key } => write!(f, "checksum mismatch for {key:?}"),
        }
    }
}

/// Compare `fresh` checksums against `stored` ledger entries.
///
/// Only entries in `fresh` are examined; a stored entry that no workflow uses
/// anymore is not a problem. The result is sorted by key.
pub fn compare(fresh: &[Entry], stored: &[Entry]) -> Vec<Problem> {
    let stored: HashMap<String, &str> = stored
        .iter()
        .map(|entry| (entry.key(), entry.checksum.as_str()))
        .collect();

    let mut problems: Vec<Problem> = fresh
        .iter()
        .filter_map(|entry| {
            let key = entry.key();
            match stored.get(&key) {
                None => Some(Problem::Missing { key }),
                Some(&checksum) if checksum != entry.checksum => Some(Problem::Mismatch { key }),
                Some(_) => None,
            }
        })
        .collect();

    problems.sort_by(|a, b| a.key().cmp(b.key()));
    problems
}
