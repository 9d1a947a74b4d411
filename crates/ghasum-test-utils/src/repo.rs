//! [`WorkflowRepo`] builder for ghasum test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Location of the ledger relative to the repository root.
pub const SUMFILE: &str = ".github/workflows/gha.sum";

/// A temporary repository with workflows under `.github/workflows`.
///
/// # Example
///
/// ```rust,no_run
/// use ghasum_test_utils::repo::WorkflowRepo;
///
/// let repo = WorkflowRepo::new();
/// repo.workflow_using("ci.yml", "build", &["actions/checkout@v4"]);
/// repo.assert_file_not_exists(".github/workflows/gha.sum");
/// ```
pub struct WorkflowRepo {
    temp_dir: TempDir,
}

impl Default for WorkflowRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowRepo {
    /// Create a repository with an empty `.github/workflows` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".github/workflows")).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the repository.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of the ledger.
    pub fn sumfile_path(&self) -> PathBuf {
        self.root().join(SUMFILE)
    }

    /// Write a workflow file with raw YAML content.
    pub fn workflow(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(".github/workflows").join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a workflow with a single job whose steps use `uses`.
    pub fn workflow_using(&self, name: &str, job: &str, uses: &[&str]) -> PathBuf {
        let mut content = format!("on: push\njobs:\n  {job}:\n    runs-on: ubuntu-latest\n");
        if uses.is_empty() {
            content.push_str("    steps: []\n");
        } else {
            content.push_str("    steps:\n");
        }
        for action in uses {
            content.push_str(&format!("      - uses: {action}\n"));
        }
        self.workflow(name, &content)
    }

    /// Read the ledger.
    ///
    /// # Panics
    /// Panics if the ledger does not exist.
    pub fn read_sumfile(&self) -> String {
        fs::read_to_string(self.sumfile_path())
            .unwrap_or_else(|_| panic!("Could not read ledger: {}", self.sumfile_path().display()))
    }

    /// Overwrite the ledger.
    pub fn write_sumfile(&self, content: &str) {
        fs::write(self.sumfile_path(), content).unwrap();
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
