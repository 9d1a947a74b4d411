//! Command implementations for ghasum CLI

pub mod cache;
pub mod init;
pub mod update;
pub mod verify;

pub use cache::run_cache;
pub use init::run_init;
pub use update::run_update;
pub use verify::run_verify;

use colored::Colorize;
use ghasum_cache::Cache;
use ghasum_core::Config;
use ghasum_git::Cloner;
use tracing::debug;

use crate::cli::CacheArgs;
use crate::error::Result;
use crate::target::Target;

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Verification ran but found problems
    Problems,
}

/// Build the operation config for `target`.
fn build_config(target: Target, args: &CacheArgs) -> Result<Config> {
    let cache = Cache::new(args.cache.clone(), args.no_cache)?;
    let mut cfg = Config::new(target.root, cache).with_cloner(Cloner::new(&args.github_url));
    cfg.workflow = target.workflow;
    cfg.job = target.job;
    Ok(cfg)
}

/// Evict stale cache entries before an operation. Ephemeral caches start
/// empty, so there is nothing to evict.
fn evict(cfg: &Config, no_evict: bool) -> Result<()> {
    if no_evict || cfg.cache.is_ephemeral() {
        return Ok(());
    }
    let evicted = cfg.cache.evict()?;
    debug!(evicted, "Evicted stale cache entries");
    Ok(())
}

fn print_ok() {
    println!("{}", "Ok".green().bold());
}
