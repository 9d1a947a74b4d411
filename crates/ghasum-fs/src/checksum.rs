//! Directory checksums
//!
//! Computes the `h1:` directory hash used for ledger entries. Every regular
//! file below the root contributes a line `"<sha256-hex>  <relative/path>\n"`
//! to a summary (files sorted by their slash-separated relative path), and the
//! checksum is the base64 encoded SHA-256 of that summary. The result only
//! depends on file names and contents, never on timestamps or permissions.

use base64::prelude::{BASE64_STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Hash algorithms available for directory checksums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-256 based `h1:` directory hash
    Sha256,
}

impl Algorithm {
    /// The strongest algorithm available, used when writing new checksums.
    pub const BEST: Algorithm = Algorithm::Sha256;

    /// Prefix that identifies the algorithm in a rendered checksum.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Sha256 => "h1:",
        }
    }
}

/// Compute the checksum of the directory tree at `root`.
///
/// Returns the checksum including its algorithm prefix, e.g. `"h1:..."`.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked, a file cannot be read, or a
/// file name contains a newline (which would make the summary ambiguous).
pub fn compute_dir_checksum(root: &Path, algorithm: Algorithm) -> Result<String> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let rel = entry.path().strip_prefix(root).map_err(|e| Error::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push((name, entry.into_path()));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    debug!(root = %root.display(), files = files.len(), "Hashing directory");

    match algorithm {
        Algorithm::Sha256 => {
            let mut summary = String::new();
            for (name, path) in &files {
                if name.contains('\n') {
                    return Err(Error::InvalidFileName { path: name.clone() });
                }
                let content = fs::read(path).map_err(|e| Error::io(path, e))?;
                // Writing to a String cannot fail.
                let _ = writeln!(summary, "{:x}  {}", Sha256::digest(&content), name);
            }
            let digest = Sha256::digest(summary.as_bytes());
            Ok(format!("{}{}", algorithm.prefix(), BASE64_STANDARD.encode(digest)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn checksum_has_prefix() {
        let dir = tree(&[("action.yml", "name: test")]);
        let checksum = compute_dir_checksum(dir.path(), Algorithm::Sha256).unwrap();
        assert!(checksum.starts_with("h1:"));
    }

    #[test]
    fn checksum_is_deterministic() {
        let dir = tree(&[("a.txt", "a"), ("nested/b.txt", "b")]);
        let first = compute_dir_checksum(dir.path(), Algorithm::BEST).unwrap();
        let second = compute_dir_checksum(dir.path(), Algorithm::BEST).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn content_change_changes_checksum() {
        let a = tree(&[("a.txt", "one")]);
        let b = tree(&[("a.txt", "two")]);
        assert_ne!(
            compute_dir_checksum(a.path(), Algorithm::Sha256).unwrap(),
            compute_dir_checksum(b.path(), Algorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn rename_changes_checksum() {
        let a = tree(&[("a.txt", "same")]);
        let b = tree(&[("b.txt", "same")]);
        assert_ne!(
            compute_dir_checksum(a.path(), Algorithm::Sha256).unwrap(),
            compute_dir_checksum(b.path(), Algorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn empty_directories_do_not_contribute() {
        let a = tree(&[("a.txt", "x")]);
        let b = tree(&[("a.txt", "x")]);
        fs::create_dir_all(b.path().join("empty/dir")).unwrap();
        assert_eq!(
            compute_dir_checksum(a.path(), Algorithm::Sha256).unwrap(),
            compute_dir_checksum(b.path(), Algorithm::Sha256).unwrap()
        );
    }

    #[test]
    fn known_value_matches_summary_construction() {
        let dir = tree(&[("hello.txt", "hello world")]);
        let summary = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9  hello.txt\n";
        let expected = format!("h1:{}", BASE64_STANDARD.encode(Sha256::digest(summary)));
        assert_eq!(
            compute_dir_checksum(dir.path(), Algorithm::Sha256).unwrap(),
            expected
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = compute_dir_checksum(&dir.path().join("missing"), Algorithm::Sha256);
        assert!(matches!(result, Err(Error::Walk { .. })));
    }
}
