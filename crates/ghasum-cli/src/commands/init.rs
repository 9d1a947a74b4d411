//! The `init` command

use std::path::Path;

use crate::cli::CacheArgs;
use crate::commands::{Outcome, build_config, print_ok};
use crate::error::Result;
use crate::target::Target;

/// Create the checksum file for the target.
pub fn run_init(cwd: &Path, target: Option<&str>, cache: &CacheArgs) -> Result<Outcome> {
    let target = Target::resolve(target, cwd)?;
    let mut cfg = build_config(target, cache)?;

    ghasum_core::initialize(&mut cfg)?;

    print_ok();
    Ok(Outcome::Success)
}
