//! Action resolution at repository, workflow and job scope

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ghasum_fs::GhasumPath;
use tracing::debug;

use crate::{Action, Error, Result, Workflow, parse_uses};

/// Actions used by every workflow in the repository at `root`.
///
/// Workflows are the `.yml`/`.yaml` files directly inside
/// `.github/workflows`; subdirectories are not searched.
pub fn repo_actions(root: &Path) -> Result<Vec<Action>> {
    let dir = GhasumPath::WorkflowsDir.under(root);
    let entries = fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        let path = entry.path();
        let is_workflow = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yml" | "yaml")
        );
        if is_workflow && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut workflows = Vec::with_capacity(paths.len());
    for path in &paths {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        workflows.push(Workflow::parse(&content, &path.display().to_string())?);
    }

    debug!(workflows = workflows.len(), "Discovered workflows");
    actions_in(&workflows)
}

/// Actions used by all jobs of one workflow. `workflow` is relative to `root`.
pub fn workflow_actions(root: &Path, workflow: &str) -> Result<Vec<Action>> {
    let parsed = load(root, workflow)?;
    actions_in(&[parsed])
}

/// Actions used by a single job of one workflow.
///
/// A job that does not exist is an error rather than an empty result.
pub fn job_actions(root: &Path, workflow: &str, job: &str) -> Result<Vec<Action>> {
    let mut parsed = load(root, workflow)?;
    parsed.retain_job(job);
    if parsed.jobs.is_empty() {
        return Err(Error::JobNotFound {
            job: job.to_string(),
            workflow: workflow.to_string(),
        });
    }
    actions_in(&[parsed])
}

fn load(root: &Path, workflow: &str) -> Result<Workflow> {
    let path = root.join(workflow);
    let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    Workflow::parse(&content, workflow)
}

/// Unique actions across workflows, ordered by owner, project and ref.
fn actions_in(workflows: &[Workflow]) -> Result<Vec<Action>> {
    let mut unique = BTreeSet::new();
    for uses in workflows.iter().flat_map(Workflow::uses) {
        if is_local_or_container(uses) {
            debug!(uses, "Skipping step without an upstream repository");
            continue;
        }
        unique.insert(parse_uses(uses)?);
    }
    Ok(unique.into_iter().collect())
}

/// Local actions and container images name no repository to checksum.
fn is_local_or_container(uses: &str) -> bool {
    uses.starts_with("./") || uses.starts_with("docker://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_and_container_steps_are_recognised() {
        assert!(is_local_or_container("./.github/actions/setup"));
        assert!(is_local_or_container("docker://alpine:3.19"));
        assert!(!is_local_or_container("actions/checkout@v4"));
    }

    #[test]
    fn duplicates_collapse_across_workflows() {
        let a = Workflow::parse(
            "jobs:\n  a:\n    steps:\n      - uses: foo/bar@v1\n      - uses: foo/bar/sub@v1\n",
            "a.yml",
        )
        .unwrap();
        let b = Workflow::parse("jobs:\n  b:\n    steps:\n      - uses: foo/bar@v1\n", "b.yml")
            .unwrap();

        let actions = actions_in(&[a, b]).unwrap();
        assert_eq!(actions, vec![Action::new("foo", "bar", "v1")]);
    }

    #[test]
    fn invalid_uses_fails_resolution() {
        let w = Workflow::parse("jobs:\n  a:\n    steps:\n      - uses: foobar\n", "a.yml").unwrap();
        assert!(matches!(actions_in(&[w]), Err(Error::InvalidUses { .. })));
    }
}
