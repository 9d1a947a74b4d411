//! Version 1 body codec
//!
//! One entry per line: the ID parts joined with `@`, a single space, then the
//! checksum. Lines are sorted by their rendered text.

use std::collections::HashSet;

use crate::entry::ID_SEPARATOR;
use crate::{Entry, Error, Result};

/// Decode body lines. `first_line` is the 1-based line number of `lines[0]`
/// in the whole file, used for error reporting.
pub(crate) fn decode(lines: &[&str], first_line: usize) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let split = line
            .find(' ')
            .filter(|&j| j > 0 && j < line.len() - 1)
            .ok_or(Error::MalformedEntry {
                line: first_line + i,
            })?;

        let (id, checksum) = (&line[..split], &line[split + 1..]);
        entries.push(Entry::new(
            id.split(ID_SEPARATOR).map(str::to_string).collect(),
            checksum,
        ));
    }

    validate(&entries)?;
    Ok(entries)
}

/// Encode entries as body text, sorted by rendered line.
pub(crate) fn encode(entries: &[Entry]) -> Result<String> {
    validate(entries)?;

    let mut lines: Vec<String> = entries.iter().map(Entry::render).collect();
    lines.sort();
    Ok(lines.concat())
}

/// Semantic checks shared by encode and decode.
///
/// Duplicates are reported before missing fields, and missing fields before
/// forbidden characters.
fn validate(entries: &[Entry]) -> Result<()> {
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_slice()) {
            return Err(Error::DuplicateEntry { id: entry.key() });
        }
    }

    for entry in entries {
        if entry.id.is_empty()
            || entry.checksum.is_empty()
            || entry.id.iter().any(|part| part.is_empty())
        {
            return Err(Error::MissingField { id: entry.key() });
        }
    }

    for entry in entries {
        let bad_checksum = entry.checksum.contains([' ', '\n']);
        let bad_id = entry
            .id
            .iter()
            .any(|part| part.contains([' ', '\n', ID_SEPARATOR]));
        if bad_checksum || bad_id {
            return Err(Error::ForbiddenCharacter { id: entry.key() });
        }
    }

    Ok(())
}
