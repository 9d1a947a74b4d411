//! Configuration bundle shared by all operations

use std::path::PathBuf;

use ghasum_cache::Cache;
use ghasum_fs::GhasumPath;
use ghasum_git::Cloner;

/// What to operate on and how to obtain dependencies.
#[derive(Debug)]
pub struct Config {
    /// Repository root.
    pub root: PathBuf,
    /// Workflow file relative to `root`; all workflows when `None`.
    pub workflow: Option<String>,
    /// Job within `workflow`; all jobs when `None`. Ignored without a workflow.
    pub job: Option<String>,
    pub cache: Cache,
    pub cloner: Cloner,
    /// Never clone; every dependency must already be cached.
    pub offline: bool,
}

impl Config {
    /// Configuration covering every workflow in the repository at `root`.
    pub fn new(root: impl Into<PathBuf>, cache: Cache) -> Self {
        Self {
            root: root.into(),
            workflow: None,
            job: None,
            cache,
            cloner: Cloner::default(),
            offline: false,
        }
    }

    pub fn with_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.workflow = Some(workflow.into());
        self
    }

    pub fn with_job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    pub fn with_cloner(mut self, cloner: Cloner) -> Self {
        self.cloner = cloner;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Location of the ledger for this repository.
    pub fn sumfile_path(&self) -> PathBuf {
        GhasumPath::SumFile.under(&self.root)
    }
}
