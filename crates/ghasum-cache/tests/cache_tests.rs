//! Cache lifecycle and eviction tests

use assert_fs::TempDir;
use assert_fs::prelude::*;
use chrono::{TimeDelta, Utc};
use ghasum_cache::{Cache, EVICT_AFTER_DAYS};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const DAY: u64 = 24 * 60 * 60;

fn age(path: &Path, days: u64) {
    let time = SystemTime::now() - Duration::from_secs(days * DAY);
    File::open(path).unwrap().set_modified(time).unwrap();
}

fn entry(root: &TempDir, rel: &str) -> PathBuf {
    let child = root.child(rel);
    child.child("action.yml").write_str("name: x").unwrap();
    child.path().to_path_buf()
}

#[rstest]
#[case::fresh(0, true)]
#[case::recent(EVICT_AFTER_DAYS as u64 - 1, true)]
#[case::stale(EVICT_AFTER_DAYS as u64 + 1, false)]
#[case::ancient(365, false)]
fn evict_by_age(#[case] days: u64, #[case] retained: bool) {
    let root = TempDir::new().unwrap();
    let path = entry(&root, "actions/checkout/v4");
    age(&path, days);

    let cache = Cache::new(Some(root.path().to_path_buf()), false).unwrap();
    let evicted = cache.evict().unwrap();

    assert_eq!(path.exists(), retained);
    assert_eq!(evicted, usize::from(!retained));
}

#[test]
fn evict_only_inspects_ref_directories() {
    let root = TempDir::new().unwrap();
    let fresh = entry(&root, "actions/checkout/v4");
    // Old contents inside a fresh entry are not considered.
    age(&fresh.join("action.yml"), 30);
    let stale = entry(&root, "actions/checkout/v3");
    age(&stale, 30);
    // Owner and project directories are never evicted themselves.
    age(&root.path().join("actions"), 30);
    age(&root.path().join("actions/checkout"), 30);

    let cache = Cache::new(Some(root.path().to_path_buf()), false).unwrap();
    assert_eq!(cache.evict().unwrap(), 1);

    assert!(fresh.join("action.yml").exists());
    assert!(!stale.exists());
    assert!(root.path().join("actions/checkout").is_dir());
}

#[test]
fn evict_with_custom_deadline() {
    let root = TempDir::new().unwrap();
    let path = entry(&root, "a/b/c");
    age(&path, 2);

    let cache = Cache::new(Some(root.path().to_path_buf()), false).unwrap();
    cache.evict_older_than(Utc::now() - TimeDelta::days(1)).unwrap();

    assert!(!path.exists());
}

#[test]
fn evict_missing_cache_is_noop() {
    let root = TempDir::new().unwrap();
    let cache = Cache::new(Some(root.path().join("missing")), false).unwrap();
    assert_eq!(cache.evict().unwrap(), 0);
}

#[test]
fn init_creates_persistent_directory() {
    let root = TempDir::new().unwrap();
    let location = root.path().join("nested/cache");
    let mut cache = Cache::new(Some(location.clone()), false).unwrap();

    drop(cache.init().unwrap());

    // A persistent cache survives its guard.
    assert!(location.is_dir());
}

#[test]
fn clear_removes_everything() {
    let root = TempDir::new().unwrap();
    let location = root.path().join("cache");
    entry(&root, "cache/a/b/c");

    let cache = Cache::new(Some(location.clone()), false).unwrap();
    cache.clear().unwrap();
    assert!(!location.exists());

    // Clearing twice is fine.
    cache.clear().unwrap();
}

#[test]
fn ephemeral_cache_is_removed_when_guard_drops() {
    let mut cache = Cache::new(None, true).unwrap();
    let path = {
        let guard = cache.init().unwrap();
        std::fs::create_dir_all(guard.entry_path("a", "b", "c")).unwrap();
        guard.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[test]
fn ephemeral_cache_is_removed_on_error_path() {
    fn failing(cache: &mut Cache) -> Result<(), String> {
        let _guard = cache.init().map_err(|e| e.to_string())?;
        Err("clone failed".to_string())
    }

    let mut cache = Cache::new(None, true).unwrap();
    assert!(failing(&mut cache).is_err());
    assert!(!cache.path().exists());
}

#[test]
fn each_ephemeral_init_gets_a_fresh_directory() {
    let mut cache = Cache::new(None, true).unwrap();
    let first = cache.init().unwrap().path().to_path_buf();
    let second = cache.init().unwrap().path().to_path_buf();
    assert_ne!(first, second);
}
