//! The ledger only depends on the set of dependencies and their content

use ghasum_cache::Cache;
use ghasum_core::{Config, initialize};
use ghasum_fs::{Algorithm, compute_dir_checksum};
use ghasum_git::Cloner;
use ghasum_test_utils::git::{TAG, UpstreamRepo, file_url};
use ghasum_test_utils::repo::WorkflowRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_with(upstreams: &TempDir, setup: impl FnOnce(&WorkflowRepo)) -> String {
    let repo = WorkflowRepo::new();
    setup(&repo);
    let cache = Cache::new(None, true).unwrap();
    let mut cfg = Config::new(repo.root(), cache).with_cloner(Cloner::new(file_url(upstreams.path())));
    initialize(&mut cfg).unwrap();
    repo.read_sumfile()
}

#[test]
fn workflow_layout_does_not_affect_ledger() {
    let upstreams = TempDir::new().unwrap();
    UpstreamRepo::create(upstreams.path(), "octo", "action");
    UpstreamRepo::create(upstreams.path(), "acme", "tool");

    let one_workflow = init_with(&upstreams, |repo| {
        repo.workflow_using("ci.yml", "build", &["octo/action@v1", "acme/tool@main"]);
    });
    let split_and_repeated = init_with(&upstreams, |repo| {
        repo.workflow_using("a.yml", "x", &["acme/tool@main", "octo/action@v1"]);
        repo.workflow_using("b.yaml", "y", &["octo/action/nested@v1", "./local"]);
    });

    assert_eq!(one_workflow, split_and_repeated);
}

#[test]
fn ledger_checksum_is_directory_hash_without_prefix() {
    let upstreams = TempDir::new().unwrap();
    UpstreamRepo::create(upstreams.path(), "octo", "action");
    let ledger = init_with(&upstreams, |repo| {
        repo.workflow_using("ci.yml", "build", &["octo/action@v1"]);
    });

    let out = TempDir::new().unwrap();
    let dest = out.path().join("clone");
    Cloner::new(file_url(upstreams.path()))
        .clone_into(&dest, "octo", "action", TAG)
        .unwrap();
    let expected = compute_dir_checksum(&dest, Algorithm::BEST).unwrap();

    assert_eq!(
        ledger,
        format!("version 1\n\nocto/action@v1 {}\n", expected.trim_start_matches("h1:"))
    );
}
