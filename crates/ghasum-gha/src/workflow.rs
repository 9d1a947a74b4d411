//! Workflow document model
//!
//! Only the parts of a workflow that reference actions are modelled; every
//! other key is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{Error, Result};

/// A parsed workflow file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub jobs: BTreeMap<String, Job>,
}

/// A job within a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single step; only steps with `uses` reference an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub uses: Option<String>,
}

impl Workflow {
    /// Parse workflow YAML. `path` is only used for error messages.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Keep only the named job.
    pub fn retain_job(&mut self, name: &str) {
        self.jobs.retain(|job, _| job == name);
    }

    /// Iterate over every `uses` value in every job.
    pub fn uses(&self) -> impl Iterator<Item = &str> {
        self.jobs
            .values()
            .flat_map(|job| job.steps.iter())
            .filter_map(|step| step.uses.as_deref())
    }
}
