//! ghasum CLI
//!
//! Checksums for GitHub Actions dependencies.

mod cli;
mod commands;
mod error;
mod target;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use commands::Outcome;
use commands::verify::VerifyOptions;
use error::{EXIT_PROBLEMS, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Problems) => ExitCode::from(EXIT_PROBLEMS),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so that `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if result.is_ok() {
        tracing::debug!(verbose, "Tracing initialized");
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            Cli::command().print_help()?;
            Ok(Outcome::Success)
        }
    }
}

fn execute_command(cmd: Commands) -> Result<Outcome> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Init { cache, target } => commands::run_init(&cwd, target.as_deref(), &cache),
        Commands::Update {
            cache,
            force,
            no_evict,
            target,
        } => commands::run_update(&cwd, target.as_deref(), &cache, force, no_evict),
        Commands::Verify {
            cache,
            offline,
            no_evict,
            json,
            target,
        } => commands::run_verify(
            &cwd,
            target.as_deref(),
            &cache,
            VerifyOptions {
                offline,
                no_evict,
                json,
            },
        ),
        Commands::Cache { cache, action } => commands::run_cache(cache, action),
        Commands::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Success)
        }
    }
}
