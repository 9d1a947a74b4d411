//! Checksum ledger codec
//!
//! Encodes and decodes the `gha.sum` text format. The codec is pure: it never
//! touches the filesystem.
//!
//! # Format
//!
//! ```text
//! version 1
//!
//! actions/checkout@v4 Zx...=
//! actions/setup-go@v5 9b...=
//! ```
//!
//! A header block of `key value` lines (which must include `version`), a
//! blank separator line, then one entry per line. The content always ends
//! with a newline. Entry lines are sorted so the same set of entries always
//! encodes to the same bytes.

mod entry;
mod error;
mod headers;
mod v1;
mod version;

pub use entry::Entry;
pub use error::{Error, ErrorKind, Result};
pub use version::Version;

use headers::Headers;
use tracing::debug;

/// Encode `entries` as a ledger of the given version.
///
/// The output is independent of the order of `entries`.
///
/// # Errors
///
/// Fails with the same validation errors as [`decode`]: duplicate IDs, empty
/// ID parts or checksums, and delimiter characters inside IDs or checksums.
pub fn encode(version: Version, entries: &[Entry]) -> Result<String> {
    let body = match version {
        Version::V1 => v1::encode(entries)?,
    };

    debug!(version = %version, entries = entries.len(), "Encoded ledger");
    Ok(format!("version {}\n\n{}", version, body))
}

/// Decode ledger text into its entries.
///
/// # Errors
///
/// Fails on a missing final newline, malformed headers, an absent or
/// unsupported version, malformed entry lines, and semantically invalid entry
/// sets (duplicates, missing parts).
pub fn decode(text: &str) -> Result<Vec<Entry>> {
    let lines = split_lines(text)?;
    let headers = Headers::parse(&lines)?;
    let version = headers.version()?;

    // Body starts after the header lines and the blank separator.
    let body_start = headers.len() + 1;
    let body: &[&str] = if lines.len() > body_start {
        &lines[body_start..lines.len() - 1]
    } else {
        &[]
    };

    let entries = match version {
        Version::V1 => v1::decode(body, body_start + 1)?,
    };

    debug!(version = %version, entries = entries.len(), "Decoded ledger");
    Ok(entries)
}

/// Decode only the version of a ledger.
///
/// Succeeds whenever the header block is well formed and names a supported
/// version, even if the body is corrupt. Used to repair a damaged ledger while
/// keeping its version.
pub fn decode_version(text: &str) -> Result<Version> {
    let lines: Vec<&str> = text.split('\n').collect();
    Headers::parse(&lines)?.version()
}

/// Split ledger text into lines, enforcing the mandatory final newline.
///
/// The returned slice always ends with the empty string after the final `\n`.
fn split_lines(text: &str) -> Result<Vec<&str>> {
    let lines: Vec<&str> = text.split('\n').collect();
    match lines.last() {
        Some(last) if last.is_empty() => Ok(lines),
        _ => Err(Error::MissingFinalNewline),
    }
}
