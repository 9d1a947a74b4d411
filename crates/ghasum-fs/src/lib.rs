//! Filesystem primitives for ghasum
//!
//! Provides the directory checksum used for ledger entries and the locked
//! file handles used to create, rewrite and read the ledger.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;

pub use checksum::{Algorithm, compute_dir_checksum};
pub use constants::GhasumPath;
pub use error::{Error, Result};
pub use io::LockedFile;
