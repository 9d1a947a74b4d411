//! The `update` command

use std::path::Path;

use crate::cli::CacheArgs;
use crate::commands::{Outcome, build_config, evict, print_ok};
use crate::error::Result;
use crate::target::Target;

/// Recompute and rewrite the checksum file for the target.
pub fn run_update(
    cwd: &Path,
    target: Option<&str>,
    cache: &CacheArgs,
    force: bool,
    no_evict: bool,
) -> Result<Outcome> {
    let target = Target::resolve(target, cwd)?;
    let mut cfg = build_config(target, cache)?;
    evict(&cfg, no_evict)?;

    ghasum_core::update(&mut cfg, force)?;

    print_ok();
    Ok(Outcome::Success)
}
