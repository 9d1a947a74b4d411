//! Ledger header block

use std::collections::HashMap;

use crate::{Error, Result, Version};

/// Parsed `key value` header lines, independent of their order.
#[derive(Debug, Default)]
pub(crate) struct Headers {
    values: HashMap<String, String>,
}

impl Headers {
    /// Parse header lines up to (not including) the first empty line.
    pub(crate) fn parse(lines: &[&str]) -> Result<Self> {
        let mut values = HashMap::new();
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                break;
            }

            let (key, value) = line
                .split_once(' ')
                .ok_or(Error::InvalidHeader { line: i + 1 })?;
            if values.contains_key(key) {
                return Err(Error::DuplicateHeader {
                    key: key.to_string(),
                    line: i + 1,
                });
            }
            values.insert(key.to_string(), value.to_string());
        }

        Ok(Self { values })
    }

    /// Number of header lines.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Look up the `version` header.
    pub(crate) fn version(&self) -> Result<Version> {
        self.values
            .get("version")
            .ok_or(Error::VersionNotFound)?
            .parse()
    }
}
