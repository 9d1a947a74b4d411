//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use ghasum_git::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// ghasum - Checksums for GitHub Actions
///
/// Records a checksum for every action your workflows use and verifies that
/// their content has not changed since.
#[derive(Parser, Debug)]
#[command(name = "ghasum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where cloned actions are kept.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CacheArgs {
    /// Cache directory (defaults to ~/.ghasum)
    #[arg(long, env = "GHASUM_CACHE", value_name = "DIR")]
    pub cache: Option<PathBuf>,

    /// Use a temporary cache removed afterwards; overrides --cache
    #[arg(long)]
    pub no_cache: bool,

    /// Base URL actions are cloned from
    #[arg(long, env = "GHASUM_GITHUB_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    pub github_url: String,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the checksum file for a repository
    ///
    /// Fails if .github/workflows/gha.sum already exists.
    ///
    /// Target is a repository directory (default: current directory), a
    /// workflow file, or a workflow file with a `:job` suffix.
    Init {
        #[command(flatten)]
        cache: CacheArgs,

        /// Repository, workflow file, or workflow:job
        target: Option<String>,
    },

    /// Recompute all checksums and rewrite the checksum file
    Update {
        #[command(flatten)]
        cache: CacheArgs,

        /// Repair a checksum file with an unreadable header or version
        #[arg(long)]
        force: bool,

        /// Do not evict old cache entries first
        #[arg(long)]
        no_evict: bool,

        /// Repository, workflow file, or workflow:job
        target: Option<String>,
    },

    /// Check actions against the checksum file
    ///
    /// Exits with code 3 if any checksum is missing or does not match.
    Verify {
        #[command(flatten)]
        cache: CacheArgs,

        /// Only use cached actions, never clone
        #[arg(long)]
        offline: bool,

        /// Do not evict old cache entries first
        #[arg(long)]
        no_evict: bool,

        /// Output problems as JSON
        #[arg(long)]
        json: bool,

        /// Repository, workflow file, or workflow:job
        target: Option<String>,
    },

    /// Manage the cache of cloned actions
    Cache {
        /// Cache directory (defaults to ~/.ghasum)
        #[arg(long, env = "GHASUM_CACHE", value_name = "DIR")]
        cache: Option<PathBuf>,

        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print the version of ghasum
    Version,
}

/// Cache subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    /// Remove everything from the cache
    Clear,
    /// Remove entries older than 5 days
    Evict,
    /// Print the cache location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_verify_flags() {
        let cli = Cli::try_parse_from([
            "ghasum", "verify", "--offline", "--no-evict", "--json", "repo",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Verify {
                offline,
                no_evict,
                json,
                target,
                ..
            }) => {
                assert!(offline && no_evict && json);
                assert_eq!(target.as_deref(), Some("repo"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_update_force() {
        let cli = Cli::try_parse_from(["ghasum", "update", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update { force: true, no_evict: false, target: None, .. })
        ));
    }

    #[test]
    fn parse_cache_path_with_location() {
        let cli = Cli::try_parse_from(["ghasum", "cache", "--cache", "/tmp/c", "path"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Cache {
                cache: Some(PathBuf::from("/tmp/c")),
                action: CacheAction::Path,
            })
        );
    }

    #[test]
    fn cache_requires_action() {
        assert!(Cli::try_parse_from(["ghasum", "cache"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["ghasum", "init", "--force"]).is_err());
    }
}
