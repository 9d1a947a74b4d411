//! Ledger operations: initialize, update and verify

use tracing::{info, warn};

use ghasum_fs::io::{read_locked, remove_file_if_exists};
use ghasum_fs::{Algorithm, LockedFile};
use ghasum_sumfile::{ErrorKind, Version};

use crate::compute::{compute, find_actions};
use crate::{Config, Error, Problem, Result, compare};

/// Create the ledger for the actions in scope.
///
/// Fails with [`Error::AlreadyInitialized`] if a ledger exists, leaving it
/// untouched. On any later failure the new ledger is removed again.
pub fn initialize(cfg: &mut Config) -> Result<()> {
    let path = cfg.sumfile_path();
    let mut file = LockedFile::create_new(&path).map_err(|e| match e {
        ghasum_fs::Error::AlreadyExists { .. } => Error::AlreadyInitialized { path: path.clone() },
        other => Error::SumfileCreate(other),
    })?;

    let result = populate(cfg, &mut file, Version::LATEST);
    if result.is_err() {
        drop(file);
        if let Err(e) = remove_file_if_exists(&path) {
            warn!(path = %path.display(), error = %e, "Could not remove partial ledger");
        }
    } else {
        info!(path = %path.display(), "Initialized ledger");
    }
    result
}

/// Recompute every checksum in scope and rewrite the ledger in place.
///
/// The stored version is kept. Without `force` the existing ledger must decode
/// cleanly; with `force` an unreadable header block or version falls back to
/// [`Version::LATEST`] and a corrupted body is simply replaced.
pub fn update(cfg: &mut Config, force: bool) -> Result<()> {
    let path = cfg.sumfile_path();
    let mut file = LockedFile::open_exclusive(&path).map_err(|e| {
        if e.is_not_found() {
            Error::NotInitialized { path: path.clone() }
        } else {
            Error::SumfileOpen(e)
        }
    })?;

    let raw = file.read_to_string().map_err(Error::SumfileRead)?;
    let version = stored_version(cfg, &raw, force)?;

    populate(cfg, &mut file, version)?;
    info!(path = %path.display(), %version, force, "Updated ledger");
    Ok(())
}

/// Compare fresh checksums for the actions in scope against the ledger.
///
/// Never modifies the ledger. An empty result means everything matches.
pub fn verify(cfg: &mut Config) -> Result<Vec<Problem>> {
    let path = cfg.sumfile_path();
    let raw = read_locked(&path).map_err(|e| {
        if e.is_not_found() {
            Error::NotInitialized { path: path.clone() }
        } else {
            Error::SumfileRead(e)
        }
    })?;

    let stored = ghasum_sumfile::decode(&raw).map_err(|source| Error::SumfileDecode {
        path: path.clone(),
        source,
    })?;

    let actions = find_actions(cfg)?;
    let fresh = compute(cfg, &actions, Algorithm::Sha256)?;
    let problems = compare(&fresh, &stored);

    info!(checked = fresh.len(), problems = problems.len(), "Verified ledger");
    Ok(problems)
}

fn populate(cfg: &mut Config, file: &mut LockedFile, version: Version) -> Result<()> {
    let actions = find_actions(cfg)?;
    let entries = compute(cfg, &actions, Algorithm::BEST)?;
    let content = ghasum_sumfile::encode(version, &entries).map_err(Error::SumfileEncode)?;
    file.rewrite(content.as_bytes()).map_err(Error::SumfileWrite)
}

fn stored_version(cfg: &Config, raw: &str, force: bool) -> Result<Version> {
    let decode_error = |source| Error::SumfileDecode {
        path: cfg.sumfile_path(),
        source,
    };

    if !force {
        ghasum_sumfile::decode(raw).map_err(decode_error)?;
        return ghasum_sumfile::decode_version(raw).map_err(decode_error);
    }

    match ghasum_sumfile::decode_version(raw) {
        Ok(version) => Ok(version),
        Err(e) if matches!(e.kind(), ErrorKind::Headers | ErrorKind::Version) => {
            warn!(error = %e, "Stored version unreadable, using latest");
            Ok(Version::LATEST)
        }
        Err(e) => Err(decode_error(e)),
    }
}
