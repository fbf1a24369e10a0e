mod common;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use serviceaccess::loader::{AutomountNudge, NoNudge, Sleeper};
use serviceaccess::{AccessError, Loader, ResolutionInputs, RetryPolicy, Tag, parse_with};

use common::write_services;

/// Records each delay and mounts the file once `mount_after` sleeps have passed.
#[derive(Clone)]
struct SlowMount {
    sleeps: Arc<AtomicU32>,
    mount_after: u32,
    dir: PathBuf,
}

impl SlowMount {
    fn new(dir: &Path, mount_after: u32) -> Self {
        Self {
            sleeps: Arc::default(),
            mount_after,
            dir: dir.to_path_buf(),
        }
    }

    fn sleeps(&self) -> u32 {
        self.sleeps.load(Ordering::SeqCst)
    }
}

impl Sleeper for SlowMount {
    fn sleep(&self, delay: Duration) {
        assert_eq!(delay, Duration::from_secs(30));
        let slept = self.sleeps.fetch_add(1, Ordering::SeqCst) + 1;
        if slept == self.mount_after {
            write_services(&self.dir, "late.ini", "[db-late]\nuser = u\n", 0o600);
        }
    }
}

#[derive(Clone, Default)]
struct CountingNudge(Arc<AtomicU32>);

impl AutomountNudge for CountingNudge {
    fn nudge(&self, _path: &Path) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn inputs(file: PathBuf) -> ResolutionInputs {
    ResolutionInputs {
        file: Some(file),
        section: Some("db-late".to_string()),
        tag: Tag::new("db"),
        retry: true,
    }
}

#[test]
fn file_appearing_between_attempts_is_loaded() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mount = SlowMount::new(dir.path(), 2);
    let nudges = CountingNudge::default();
    let loader = Loader::new(RetryPolicy::from_retry(true))
        .with_sleeper(mount.clone())
        .with_nudge(nudges.clone());

    let profile = parse_with(&inputs(dir.path().join("late.ini")), &loader).expect("should load");
    assert_eq!(profile.get("user"), Some("u"));
    assert_eq!(mount.sleeps(), 2);
    assert_eq!(nudges.0.load(Ordering::SeqCst), 2);
}

#[test]
fn never_mounted_file_exhausts_five_attempts() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mount = SlowMount::new(dir.path(), u32::MAX);
    let nudges = CountingNudge::default();
    let loader = Loader::new(RetryPolicy::from_retry(true))
        .with_sleeper(mount.clone())
        .with_nudge(nudges.clone());

    let err = parse_with(&inputs(dir.path().join("late.ini")), &loader).expect_err("should fail");
    assert!(matches!(err, AccessError::FileNotFound { .. }));
    assert_eq!(mount.sleeps(), 4);
    assert_eq!(nudges.0.load(Ordering::SeqCst), 4);
}

#[test]
fn custom_policy_bounds_attempts() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mount = SlowMount::new(dir.path(), u32::MAX);
    let policy = RetryPolicy::from_retry(true).with_max_attempts(2);
    let loader = Loader::new(policy).with_sleeper(mount.clone()).with_nudge(NoNudge);

    parse_with(&inputs(dir.path().join("late.ini")), &loader).expect_err("should fail");
    assert_eq!(mount.sleeps(), 1);
}

#[test]
fn directory_path_is_retried_then_not_found() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let mount = SlowMount::new(dir.path(), u32::MAX);
    let nudges = CountingNudge::default();
    let loader = Loader::new(RetryPolicy::from_retry(true))
        .with_sleeper(mount.clone())
        .with_nudge(nudges.clone());

    let err = parse_with(&inputs(dir.path().to_path_buf()), &loader).expect_err("should fail");
    match err {
        AccessError::FileNotFound { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::IsADirectory)
        }
        other => panic!("expected file not found, got {other:?}"),
    }
    assert_eq!(mount.sleeps(), 4);
    assert_eq!(nudges.0.load(Ordering::SeqCst), 4);
}
