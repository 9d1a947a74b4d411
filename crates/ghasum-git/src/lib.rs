//! Git access for ghasum
//!
//! Fetches an action repository at an exact ref and leaves a plain source
//! tree behind (no `.git` directory).

pub mod clone;
pub mod error;

pub use clone::{Cloner, DEFAULT_BASE_URL, RefKind};
pub use error::{Error, Result};
