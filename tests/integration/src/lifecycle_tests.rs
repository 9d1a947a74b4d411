//! Full ledger lifecycle across workflow changes and upstream changes

use ghasum_cache::Cache;
use ghasum_core::{Config, Problem, initialize, update, verify};
use ghasum_git::Cloner;
use ghasum_sumfile::Version;
use ghasum_test_utils::git::{UpstreamRepo, file_url};
use ghasum_test_utils::repo::WorkflowRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Project {
    repo: WorkflowRepo,
    upstreams: TempDir,
    cache: TempDir,
}

impl Project {
    fn new(upstreams: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (owner, project) in upstreams {
            UpstreamRepo::create(dir.path(), owner, project);
        }
        Self {
            repo: WorkflowRepo::new(),
            upstreams: dir,
            cache: TempDir::new().unwrap(),
        }
    }

    fn config(&self) -> Config {
        let cache = Cache::new(Some(self.cache.path().to_path_buf()), false).unwrap();
        Config::new(self.repo.root(), cache).with_cloner(Cloner::new(file_url(self.upstreams.path())))
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = ghasum_sumfile::decode(&self.repo.read_sumfile())
            .unwrap()
            .iter()
            .map(|entry| entry.key())
            .collect();
        keys.sort();
        keys
    }
}

#[test]
fn workflow_changes_are_tracked_through_update() {
    let project = Project::new(&[("octo", "action"), ("acme", "tool")]);
    project.repo.workflow_using("ci.yml", "build", &["octo/action@v1"]);

    initialize(&mut project.config()).unwrap();
    assert_eq!(project.keys(), vec!["octo/action@v1"]);

    // A new dependency appears in a second workflow.
    project.repo.workflow_using("release.yml", "publish", &["acme/tool/sub@main"]);
    assert_eq!(
        verify(&mut project.config()).unwrap(),
        vec![Problem::Missing {
            key: "acme/tool@main".to_string()
        }]
    );

    update(&mut project.config(), false).unwrap();
    assert_eq!(project.keys(), vec!["acme/tool@main", "octo/action@v1"]);
    assert!(verify(&mut project.config()).unwrap().is_empty());

    // Dropping a dependency leaves a stale entry that is not reported...
    project.repo.workflow_using("release.yml", "publish", &[]);
    assert!(verify(&mut project.config()).unwrap().is_empty());

    // ...until the next update removes it.
    update(&mut project.config(), false).unwrap();
    assert_eq!(project.keys(), vec!["octo/action@v1"]);
}

#[test]
fn upstream_tag_move_is_detected_and_accepted_by_update() {
    let upstreams = TempDir::new().unwrap();
    let upstream = UpstreamRepo::create(upstreams.path(), "octo", "action");
    let repo = WorkflowRepo::new();
    repo.workflow_using("ci.yml", "build", &["octo/action@v1"]);
    let config = || {
        Config::new(repo.root(), Cache::new(None, true).unwrap())
            .with_cloner(Cloner::new(file_url(upstreams.path())))
    };

    initialize(&mut config()).unwrap();
    let before = repo.read_sumfile();

    let moved = upstream.commit(&[("dist/index.js", "evil()\n")], "Compromise");
    upstream.tag("v1", moved);

    assert_eq!(
        verify(&mut config()).unwrap(),
        vec![Problem::Mismatch {
            key: "octo/action@v1".to_string()
        }]
    );

    update(&mut config(), false).unwrap();
    assert_ne!(repo.read_sumfile(), before);
    assert!(verify(&mut config()).unwrap().is_empty());
}

#[test]
fn update_keeps_stored_version() {
    let project = Project::new(&[("octo", "action")]);
    project.repo.workflow_using("ci.yml", "build", &["octo/action@v1"]);
    project.repo.write_sumfile("version 1\n\n");

    update(&mut project.config(), false).unwrap();

    let content = project.repo.read_sumfile();
    assert_eq!(ghasum_sumfile::decode_version(&content).unwrap(), Version::V1);
    assert_eq!(project.keys(), vec!["octo/action@v1"]);
}

#[test]
fn cached_checksums_match_fresh_clones() {
    let project = Project::new(&[("octo", "action")]);
    project.repo.workflow_using("ci.yml", "build", &["octo/action@v1"]);
    initialize(&mut project.config()).unwrap();
    let cached = project.repo.read_sumfile();

    // Start over with an empty cache.
    project.repo.write_sumfile("version 1\n\n");
    std::fs::remove_dir_all(project.cache.path()).unwrap();
    update(&mut project.config(), false).unwrap();

    assert_eq!(project.repo.read_sumfile(), cached);
}
