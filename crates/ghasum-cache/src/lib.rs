//! Cache of cloned action repositories
//!
//! Entries live at `<cache>/<owner>/<project>/<ref>`. A cache is either
//! persistent (default `~/.ghasum`) or ephemeral, in which case it is a fresh
//! temporary directory removed again when the [`CacheGuard`] goes away.

pub mod cache;
pub mod error;

pub use cache::{Cache, CacheGuard, DEFAULT_DIR_NAME, EVICT_AFTER_DAYS};
pub use error::{Error, Result};
