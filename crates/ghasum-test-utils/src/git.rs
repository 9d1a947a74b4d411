//! Upstream action repositories for clone tests.
//!
//! Repositories are laid out as `<base>/<owner>/<project>` so a cloner pointed
//! at [`file_url`]`(base)` resolves them the same way it resolves GitHub.

use git2::{IndexAddOption, Oid, Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::{Path, PathBuf};

/// Tag created on the first commit of every upstream fixture.
pub const TAG: &str = "v1";

/// Default branch of every upstream fixture.
pub const BRANCH: &str = "main";

/// A real repository with a short history:
///
/// - commit 1 adds `action.yml` and `README.md`, tagged [`TAG`]
/// - commit 2 changes `action.yml`, the tip of [`BRANCH`]
pub struct UpstreamRepo {
    repo: Repository,
    path: PathBuf,
    /// Commit the tag points at.
    pub tagged_commit: String,
    /// Commit at the tip of the branch.
    pub head_commit: String,
}

impl UpstreamRepo {
    /// Create the fixture at `<base>/<owner>/<project>`.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn create(base: &Path, owner: &str, project: &str) -> Self {
        let path = base.join(owner).join(project);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("UpstreamRepo: failed to create {}: {e}", path.display()));

        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(BRANCH);
        let repo = Repository::init_opts(&path, &opts)
            .unwrap_or_else(|e| panic!("UpstreamRepo: failed to init {}: {e}", path.display()));

        let mut upstream = Self {
            repo,
            path,
            tagged_commit: String::new(),
            head_commit: String::new(),
        };

        let first = upstream.commit(
            &[("action.yml", "name: fixture\nruns:\n  using: node20\n"), ("README.md", "# fixture\n")],
            "Initial commit",
        );
        upstream.tag(TAG, first);
        let second = upstream.commit(
            &[("action.yml", "name: fixture\nruns:\n  using: node22\n")],
            "Bump runtime",
        );

        upstream.tagged_commit = first.to_string();
        upstream.head_commit = second.to_string();
        upstream
    }

    /// Working directory of the fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `files` and commit them on the current branch.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn commit(&self, files: &[(&str, &str)], message: &str) -> Oid {
        for (name, content) in files {
            let file = self.path.join(name);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&file, content)
                .unwrap_or_else(|e| panic!("UpstreamRepo: failed to write {name}: {e}"));
        }

        let mut index = self.repo.index().unwrap();
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        let tree = self.repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = Signature::now("Test User", "test@test.com").unwrap();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap_or_else(|e| panic!("UpstreamRepo: commit {message:?} failed: {e}"))
    }

    /// Create (or move) an annotated tag.
    ///
    /// # Panics
    /// Panics if the tag cannot be written.
    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = Signature::now("Test User", "test@test.com").unwrap();
        self.repo
            .tag(name, &object, &sig, name, true)
            .unwrap_or_else(|e| panic!("UpstreamRepo: failed to tag {name}: {e}"));
    }

    /// Create a branch at `target` without checking it out.
    ///
    /// # Panics
    /// Panics if the branch cannot be created.
    pub fn branch(&self, name: &str, target: Oid) {
        let commit = self.repo.find_commit(target).unwrap();
        self.repo
            .branch(name, &commit, true)
            .unwrap_or_else(|e| panic!("UpstreamRepo: failed to create branch {name}: {e}"));
    }
}

/// `file://` URL for a local directory.
pub fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{path}")
    } else {
        format!("file:///{path}")
    }
}
