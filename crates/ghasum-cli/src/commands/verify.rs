//! The `verify` command

use colored::Colorize;
use ghasum_core::Problem;
use std::path::Path;

use crate::cli::CacheArgs;
use crate::commands::{Outcome, build_config, evict, print_ok};
use crate::error::Result;
use crate::target::Target;

/// Options for `verify` beyond the target and cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    pub offline: bool,
    pub no_evict: bool,
    pub json: bool,
}

/// Verify the target against its checksum file.
pub fn run_verify(
    cwd: &Path,
    target: Option<&str>,
    cache: &CacheArgs,
    options: VerifyOptions,
) -> Result<Outcome> {
    let target = Target::resolve(target, cwd)?;
    let mut cfg = build_config(target, cache)?.with_offline(options.offline);
    evict(&cfg, options.no_evict)?;

    let problems = ghasum_core::verify(&mut cfg)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&problems)?);
    } else if problems.is_empty() {
        print_ok();
    } else {
        print!("{}", render_problems(&problems));
    }

    Ok(if problems.is_empty() {
        Outcome::Success
    } else {
        Outcome::Problems
    })
}

/// Human readable problem report.
pub fn render_problems(problems: &[Problem]) -> String {
    let mut out = format!(
        "{} problem(s) occurred during validation:\n",
        problems.len().to_string().red().bold()
    );
    for problem in problems {
        out.push_str(&format!("  {problem}\n"));
    }
    out
}
