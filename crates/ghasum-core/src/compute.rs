//! Finding dependencies and computing their checksums

use std::path::Path;
use tracing::{debug, info};

use ghasum_fs::{Algorithm, compute_dir_checksum};
use ghasum_gha::{Action, job_actions, repo_actions, workflow_actions};
use ghasum_git::Cloner;
use ghasum_sumfile::Entry;

use crate::{Config, Error, Result};

/// The actions in scope for `cfg`: the whole repository, one workflow, or one
/// job of one workflow.
pub fn find_actions(cfg: &Config) -> Result<Vec<Action>> {
    let actions = match (&cfg.workflow, &cfg.job) {
        (None, _) => repo_actions(&cfg.root)?,
        (Some(workflow), None) => workflow_actions(&cfg.root, workflow)?,
        (Some(workflow), Some(job)) => job_actions(&cfg.root, workflow, job)?,
    };

    info!(actions = actions.len(), "Resolved actions");
    Ok(actions)
}

/// Compute a ledger entry for every action, cloning into the cache as needed.
///
/// The cache is initialized for the duration of the call; an ephemeral cache
/// is removed again before returning, whether or not the call succeeds.
pub fn compute(cfg: &mut Config, actions: &[Action], algorithm: Algorithm) -> Result<Vec<Entry>> {
    let cache = cfg.cache.init()?;

    let mut entries = Vec::with_capacity(actions.len());
    for action in actions {
        let dir = cache.entry_path(&action.owner, &action.project, &action.git_ref);
        materialize(&dir, action, &cfg.cloner, cfg.offline)?;

        let checksum = compute_dir_checksum(&dir, algorithm).map_err(|source| Error::Checksum {
            action: action.to_string(),
            source,
        })?;
        let checksum = checksum
            .strip_prefix(algorithm.prefix())
            .unwrap_or(&checksum)
            .to_string();

        debug!(%action, %checksum, "Computed checksum");
        entries.push(Entry::new(
            vec![action.repository(), action.git_ref.clone()],
            checksum,
        ));
    }

    Ok(entries)
}

/// Make sure `dir` holds the source of `action`.
fn materialize(dir: &Path, action: &Action, cloner: &Cloner, offline: bool) -> Result<()> {
    if dir.exists() {
        debug!(%action, "Cache hit");
        return Ok(());
    }
    if offline {
        return Err(Error::NotCached {
            action: action.to_string(),
            path: dir.to_path_buf(),
        });
    }

    debug!(%action, "Cache miss, cloning");
    cloner
        .clone_into(dir, &action.owner, &action.project, &action.git_ref)
        .map_err(|source| Error::Clone {
            action: action.to_string(),
            source,
        })?;
    Ok(())
}
