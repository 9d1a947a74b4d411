//! The `cache` command

use ghasum_cache::Cache;
use std::path::PathBuf;

use crate::cli::CacheAction;
use crate::commands::{Outcome, print_ok};
use crate::error::Result;

/// Run a cache maintenance action on the persistent cache.
pub fn run_cache(location: Option<PathBuf>, action: CacheAction) -> Result<Outcome> {
    let cache = Cache::new(location, false)?;

    match action {
        CacheAction::Clear => {
            cache.clear()?;
            print_ok();
        }
        CacheAction::Evict => {
            cache.evict()?;
            print_ok();
        }
        CacheAction::Path => println!("{}", cache.path().display()),
    }

    Ok(Outcome::Success)
}
