//! Cache handle, scoped guard and eviction

use chrono::{DateTime, TimeDelta, Utc};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use ghasum_fs::io::remove_dir_if_exists;

use crate::{Error, Result};

/// Directory name of the default cache inside the home directory.
pub const DEFAULT_DIR_NAME: &str = ".ghasum";

/// Entries not modified for this many days are evicted.
pub const EVICT_AFTER_DAYS: i64 = 5;

/// Depth of `<owner>/<project>/<ref>` below the cache root.
const ENTRY_DEPTH: usize = 3;

/// A cache of cloned repositories.
#[derive(Debug)]
pub struct Cache {
    path: PathBuf,
    ephemeral: bool,
    temp: Option<TempDir>,
}

impl Cache {
    /// Create an uninitialized cache.
    ///
    /// Without a `location` the cache defaults to `~/.ghasum`. An ephemeral
    /// cache ignores `location` and is allocated in the system temporary
    /// directory by [`Cache::init`].
    pub fn new(location: Option<PathBuf>, ephemeral: bool) -> Result<Self> {
        let path = match (ephemeral, location) {
            (true, _) => PathBuf::new(),
            (false, Some(location)) => location,
            (false, None) => dirs::home_dir()
                .ok_or(Error::NoHomeDirectory)?
                .join(DEFAULT_DIR_NAME),
        };

        Ok(Self {
            path,
            ephemeral,
            temp: None,
        })
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Root of the cache. Empty for an ephemeral cache that is not initialized.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the entry for `owner/project@git_ref`.
    pub fn entry_path(&self, owner: &str, project: &str, git_ref: &str) -> PathBuf {
        self.path.join(owner).join(project).join(git_ref)
    }

    /// Set up the cache directory and return a guard that runs
    /// [`Cache::cleanup`] when dropped.
    pub fn init(&mut self) -> Result<CacheGuard<'_>> {
        if self.ephemeral {
            let temp = tempfile::Builder::new()
                .prefix("ghasum-clone-")
                .tempdir()
                .map_err(|source| Error::Create {
                    path: std::env::temp_dir(),
                    source,
                })?;
            self.path = temp.path().to_path_buf();
            self.temp = Some(temp);
        } else {
            create_private_dir(&self.path).map_err(|source| Error::Create {
                path: self.path.clone(),
                source,
            })?;
        }

        debug!(path = %self.path.display(), ephemeral = self.ephemeral, "Cache initialized");
        Ok(CacheGuard { cache: self })
    }

    /// Remove the whole cache. A missing cache is already clear.
    pub fn clear(&self) -> Result<()> {
        remove_dir_if_exists(&self.path).map_err(|source| Error::Clear {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "Cache cleared");
        Ok(())
    }

    /// Evict entries older than [`EVICT_AFTER_DAYS`].
    pub fn evict(&self) -> Result<usize> {
        self.evict_older_than(Utc::now() - TimeDelta::days(EVICT_AFTER_DAYS))
    }

    /// Remove every `<owner>/<project>/<ref>` entry last modified before
    /// `deadline`. Only the entry itself is inspected, not its contents.
    ///
    /// Returns the number of evicted entries.
    pub fn evict_older_than(&self, deadline: DateTime<Utc>) -> Result<usize> {
        if !self.path.is_dir() {
            return Ok(0);
        }

        let mut evicted = 0;
        let walker = WalkDir::new(&self.path)
            .min_depth(ENTRY_DEPTH)
            .max_depth(ENTRY_DEPTH);
        for entry in walker {
            let entry = entry.map_err(|e| Error::Evict {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
            let modified = entry
                .metadata()
                .map_err(|e| e.to_string())
                .and_then(|m| m.modified().map_err(|e| e.to_string()))
                .map_err(|message| Error::Evict {
                    path: entry.path().to_path_buf(),
                    message,
                })?;

            if DateTime::<Utc>::from(modified) >= deadline {
                continue;
            }

            let removed = if entry.file_type().is_dir() {
                fs::remove_dir_all(entry.path())
            } else {
                fs::remove_file(entry.path())
            };
            match removed {
                Ok(()) => {
                    debug!(entry = %entry.path().display(), "Evicted cache entry");
                    evicted += 1;
                }
                Err(e) => warn!(entry = %entry.path().display(), error = %e, "Could not evict cache entry"),
            }
        }

        info!(evicted, "Cache eviction finished");
        Ok(evicted)
    }

    /// Remove an ephemeral cache, logging instead of failing. Does nothing for
    /// a persistent cache.
    pub fn cleanup(&mut self) {
        if !self.ephemeral {
            return;
        }
        if let Some(temp) = self.temp.take() {
            let path = temp.path().to_path_buf();
            if let Err(e) = temp.close() {
                warn!(path = %path.display(), error = %e, "Could not remove ephemeral cache");
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Scoped access to an initialized cache.
#[derive(Debug)]
pub struct CacheGuard<'a> {
    cache: &'a mut Cache,
}

impl Deref for CacheGuard<'_> {
    type Target = Cache;

    fn deref(&self) -> &Cache {
        self.cache
    }
}

impl Drop for CacheGuard<'_> {
    fn drop(&mut self) {
        self.cache.cleanup();
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
