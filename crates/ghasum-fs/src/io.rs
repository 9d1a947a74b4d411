//! Locked file handles for the ledger
//!
//! The ledger is only ever touched through a [`LockedFile`], which holds an
//! advisory `fs2` lock for as long as the handle is alive. Creation uses an
//! exclusive-create open so two initializations cannot both succeed.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Error, Result};

/// An open file holding an advisory lock until dropped.
#[derive(Debug)]
pub struct LockedFile {
    file: File,
    path: PathBuf,
}

impl LockedFile {
    /// Create a new file exclusively and lock it for writing.
    ///
    /// Fails with [`Error::AlreadyExists`] if the file is already present.
    pub fn create_new(path: &Path) -> Result<Self> {
        Self::create_new_with(path, |file| file.lock_exclusive())
    }

    /// Exclusive create followed by `lock`. The new file is removed again if
    /// the lock cannot be taken.
    fn create_new_with(
        path: &Path,
        lock: impl FnOnce(&File) -> std::io::Result<()>,
    ) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::AlreadyExists {
                    path: path.to_path_buf(),
                },
                _ => Error::io(path, e),
            })?;

        if let Err(e) = lock(&file) {
            drop(file);
            if let Err(remove) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %remove, "Could not remove unlocked file");
            }
            debug!(path = %path.display(), error = %e, "Lock after create failed");
            return Err(Error::LockFailed {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing file for reading and writing with an exclusive lock.
    pub fn open_exclusive(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;

        file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing file read-only with a shared lock.
    pub fn open_shared(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;

        file.lock_shared().map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Read the whole file from the start through the locked handle.
    pub fn read_to_string(&mut self) -> Result<String> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&self.path, e))?;

        let mut content = String::new();
        self.file
            .read_to_string(&mut content)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(content)
    }

    /// Replace the file contents with `content` and flush them to disk.
    pub fn rewrite(&mut self, content: &[u8]) -> Result<()> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::io(&self.path, e))?;
        self.file.set_len(0).map_err(|e| Error::io(&self.path, e))?;
        self.file
            .write_all(content)
            .map_err(|e| Error::io(&self.path, e))?;
        self.file.sync_all().map_err(|e| Error::io(&self.path, e))
    }
}

impl Drop for LockedFile {
    fn drop(&mut self) {
        // Closing the handle releases the lock as well.
        let _ = FileExt::unlock(&self.file);
    }
}

/// Read a file under a shared lock.
pub fn read_locked(path: &Path) -> Result<String> {
    LockedFile::open_shared(path)?.read_to_string()
}

/// Remove a file, treating an already missing file as success.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Remove a directory tree, treating an already missing directory as success.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}
