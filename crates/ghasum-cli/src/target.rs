//! Resolving the target argument
//!
//! A target is a repository directory, a workflow file inside
//! `<repo>/.github/workflows`, or such a file followed by `:job`.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// The scope an operation runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub root: PathBuf,
    /// Workflow path relative to `root`, `/`-separated.
    pub workflow: Option<String>,
    pub job: Option<String>,
}

impl Target {
    /// Resolve `arg` (default `.`) relative to `cwd`.
    pub fn resolve(arg: Option<&str>, cwd: &Path) -> Result<Self> {
        let raw = arg.unwrap_or(".");
        let path = cwd.join(raw);

        if path.is_dir() {
            return Ok(Self {
                root: dunce::canonicalize(&path)?,
                workflow: None,
                job: None,
            });
        }
        if path.is_file() {
            return Self::workflow(&path, None);
        }

        // Only split off a job when what precedes it is an actual file, so
        // paths containing ':' keep working.
        if let Some((file, job)) = raw.rsplit_once(':') {
            let file = cwd.join(file);
            if file.is_file() {
                if job.is_empty() {
                    return Err(CliError::usage(format!("missing job name in target {raw:?}")));
                }
                return Self::workflow(&file, Some(job.to_string()));
            }
        }

        Err(CliError::user(format!("target {raw:?} not found")))
    }

    /// A workflow file's repository is two directories above the file's own.
    fn workflow(file: &Path, job: Option<String>) -> Result<Self> {
        let file = dunce::canonicalize(file)?;
        let root = file
            .parent()
            .and_then(Path::parent)
            .and_then(Path::parent)
            .ok_or_else(|| {
                CliError::user(format!("{} is not inside a repository", file.display()))
            })?
            .to_path_buf();

        let workflow = file
            .strip_prefix(&root)
            .map_err(|_| CliError::user(format!("{} is not inside a repository", file.display())))?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        Ok(Self {
            root,
            workflow: Some(workflow),
            job,
        })
    }
}
