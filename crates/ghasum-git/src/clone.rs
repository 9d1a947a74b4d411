//! Cloning at an exact ref
//!
//! A ref is tried as a tag, then as a branch, then as a commit hash. Each
//! attempt starts from an empty staging directory next to the destination, and
//! only a successful attempt is renamed into place, so the destination either
//! holds a complete tree or does not exist.

use git2::{AutotagOption, FetchOptions, Oid, Repository, build::CheckoutBuilder};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use ghasum_fs::{GhasumPath, io::remove_dir_if_exists};

use crate::{Error, Result};

/// Where action repositories are fetched from.
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// How a ref was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    Tag,
    Branch,
    Commit,
}

impl RefKind {
    /// Order in which interpretations are attempted.
    pub const RESOLUTION_ORDER: [RefKind; 3] = [RefKind::Tag, RefKind::Branch, RefKind::Commit];
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tag => "tag",
            Self::Branch => "branch",
            Self::Commit => "commit",
        })
    }
}

/// Clones `owner/project` repositories from a forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cloner {
    base_url: String,
    shallow: bool,
}

impl Default for Cloner {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Cloner {
    /// Cloner for repositories under `base_url` (e.g. `https://github.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        // libgit2's local transport cannot fetch shallowly.
        let shallow = !base_url.starts_with("file:");
        Self { base_url, shallow }
    }

    /// Whether tag and branch fetches use depth 1.
    ///
    /// Local transports may not support shallow fetches.
    pub fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of `owner/project`.
    pub fn repository_url(&self, owner: &str, project: &str) -> String {
        format!("{}/{}/{}", self.base_url, owner, project)
    }

    /// Fetch `owner/project` at `git_ref` into `dest` and strip its `.git`.
    ///
    /// `dest` must not exist yet. On failure nothing is left at `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RefNotFound`] when the ref cannot be resolved as a
    /// tag, a branch, or a commit.
    pub fn clone_into(&self, dest: &Path, owner: &str, project: &str, git_ref: &str) -> Result<RefKind> {
        let url = self.repository_url(owner, project);
        let parent = dest.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

        let mut attempts = Vec::new();
        for kind in RefKind::RESOLUTION_ORDER {
            let staging = tempfile::Builder::new()
                .prefix(".ghasum-staging-")
                .tempdir_in(parent)
                .map_err(|e| Error::io(parent, e))?;

            match self.fetch(staging.path(), &url, git_ref, kind) {
                Ok(()) => {
                    remove_dir_if_exists(&GhasumPath::GitDir.under(staging.path()))?;
                    fs::rename(staging.path(), dest).map_err(|e| Error::io(dest, e))?;
                    info!(%url, git_ref, %kind, dest = %dest.display(), "Cloned action");
                    return Ok(kind);
                }
                Err(e) => {
                    debug!(%url, git_ref, %kind, error = %e, "Ref did not resolve");
                    attempts.push((kind, e.to_string()));
                }
            }
            // `staging` is removed here.
        }

        Err(Error::RefNotFound {
            url,
            reference: git_ref.to_string(),
            attempts,
        })
    }

    fn fetch(&self, dir: &Path, url: &str, git_ref: &str, kind: RefKind) -> Result<()> {
        let repo = Repository::init(dir)?;
        let mut remote = repo.remote("origin", url)?;

        let mut opts = FetchOptions::new();
        opts.download_tags(AutotagOption::None);

        let target = match kind {
            RefKind::Tag | RefKind::Branch => {
                let name = match kind {
                    RefKind::Tag => format!("refs/tags/{git_ref}"),
                    _ => format!("refs/heads/{git_ref}"),
                };
                if self.shallow {
                    opts.depth(1);
                }
                remote.fetch(&[format!("+{name}:{name}")], Some(&mut opts), None)?;
                repo.revparse_single(&name)?.peel_to_commit()?.id()
            }
            RefKind::Commit => {
                if !is_commit_hash(git_ref) {
                    return Err(Error::NotACommit {
                        reference: git_ref.to_string(),
                    });
                }
                remote.fetch(
                    &["+refs/heads/*:refs/remotes/origin/*"],
                    Some(&mut opts),
                    None,
                )?;
                repo.revparse_single(git_ref)?.peel_to_commit()?.id()
            }
        };

        checkout_detached(&repo, target)
    }
}

fn checkout_detached(repo: &Repository, commit: Oid) -> Result<()> {
    let commit = repo.find_commit(commit)?;
    repo.checkout_tree(commit.as_object(), Some(CheckoutBuilder::new().force()))?;
    repo.set_head_detached(commit.id())?;
    Ok(())
}

/// Full or abbreviated hexadecimal object id.
fn is_commit_hash(git_ref: &str) -> bool {
    (4..=40).contains(&git_ref.len()) && git_ref.chars().all(|c| c.is_ascii_hexdigit())
}
