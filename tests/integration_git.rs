// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the local branch scan.
//!
//! Tests discovery, counting and report writing with real temporary repositories.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;
use verscan::cli::scan::BranchesArgs;
use verscan::cmd::branches::run_branches_command;
use verscan::config::Config;
use verscan::config::types::EnvironmentTable;
use verscan::git::query::BranchCounter;
use verscan::report::fanout::FanOut;
use verscan::report::format::ReportLayout;
use verscan::report::{FailureKind, QueryExecutor, QueryResult, Target};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("git should be installed");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a repository with `commits` empty commits and remote-tracking refs
/// `origin/<name>` pointing `behind` commits below HEAD.
fn create_repo(root: &Path, name: &str, commits: usize, refs: &[(&str, usize)]) -> PathBuf {
    let repo = root.join(name);
    std::fs::create_dir_all(&repo).unwrap();
    run_git(&["init", "--quiet"], &repo);
    for i in 0..commits {
        run_git(
            &["commit", "--allow-empty", "--quiet", "-m", &format!("c{i}")],
            &repo,
        );
    }
    for (branch, behind) in refs {
        run_git(
            &[
                "update-ref",
                &format!("refs/remotes/origin/{branch}"),
                &format!("HEAD~{behind}"),
            ],
            &repo,
        );
    }
    repo
}

#[cfg(unix)]
fn fake_git(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("fake-git");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

// =============================================================================
// BranchCounter
// =============================================================================

#[tokio::test]
async fn test_counts_remote_tracking_branches() {
    let root = temp_dir();
    let repo = create_repo(root.path(), "Games-Ab1-H5-12345", 5, &[("dev", 0), ("prod", 3)]);
    let counter = BranchCounter::builder().build();
    let target = Target::Repository(repo);
    let envs = EnvironmentTable::default();

    assert_eq!(counter.validate(&target), Ok(()));
    let dev = counter.query(&target, envs.get("dev").unwrap()).await;
    let prod = counter.query(&target, envs.get("prod").unwrap()).await;
    let uat = counter.query(&target, envs.get("uat").unwrap()).await;

    assert_eq!(dev, QueryResult::Value(5));
    assert_eq!(prod, QueryResult::Value(2));
    assert_eq!(uat, QueryResult::Failed(FailureKind::Transport));
}

#[tokio::test]
async fn test_custom_remote() {
    let root = temp_dir();
    let repo = create_repo(root.path(), "Games-Ab1-H5-12345", 2, &[]);
    run_git(&["update-ref", "refs/remotes/upstream/dev", "HEAD"], &repo);

    let counter = BranchCounter::builder().with_remote("upstream").build();
    let envs = EnvironmentTable::default();
    let result = counter
        .query(&Target::Repository(repo), envs.get("dev").unwrap())
        .await;
    assert_eq!(result, QueryResult::Value(2));
}

#[cfg(unix)]
#[tokio::test]
async fn test_hung_git_times_out() {
    let root = temp_dir();
    let repo = create_repo(root.path(), "Games-Ab1-H5-12345", 1, &[]);
    let counter = BranchCounter::builder()
        .with_program(fake_git(root.path(), "exec sleep 5"))
        .with_timeout(Duration::from_millis(300))
        .build();

    let started = std::time::Instant::now();
    let result = counter
        .query(
            &Target::Repository(repo),
            EnvironmentTable::default().get("dev").unwrap(),
        )
        .await;
    assert_eq!(result, QueryResult::Failed(FailureKind::Timeout));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_numeric_output_is_parse_error() {
    let root = temp_dir();
    let repo = create_repo(root.path(), "Games-Ab1-H5-12345", 1, &[]);
    let counter = BranchCounter::builder()
        .with_program(fake_git(root.path(), "echo 'twelve'"))
        .build();

    let result = counter
        .query(
            &Target::Repository(repo),
            EnvironmentTable::default().get("dev").unwrap(),
        )
        .await;
    assert_eq!(result, QueryResult::Failed(FailureKind::Parse));
}

// =============================================================================
// Fan-out and report
// =============================================================================

#[tokio::test]
async fn test_rejected_repository_is_not_reported() {
    let root = temp_dir();
    let repo = create_repo(root.path(), "Games-Ab1-H5-12345", 1, &[("dev", 0)]);
    let gone = root.path().join("Games-Gon-H5-00000");

    let counter = BranchCounter::builder().build();
    let envs = EnvironmentTable::default();
    let matrix = FanOut::new(&counter, &envs)
        .silent()
        .run(&[Target::Repository(gone.clone()), Target::Repository(repo)])
        .await;

    let rejected = matrix.row(&Target::Repository(gone)).unwrap();
    assert!(rejected.is_rejected());
    assert_eq!(rejected.len(), envs.len());
    assert!(
        rejected
            .results()
            .all(|(_, r)| *r == QueryResult::Failed(FailureKind::NonGitPath))
    );

    insta::assert_snapshot!(
        ReportLayout::BRANCHES.render(&matrix, &envs).replace('\t', "|"),
        @r"
    |dev|uat|stage|prod|demo
    Games-Ab1-H5-12345|1||||
    "
    );
}

#[tokio::test]
async fn test_branches_command_writes_report() {
    let first = temp_dir();
    let second = temp_dir();
    let out = temp_dir();

    create_repo(
        first.path(),
        "Games-Zz9-H5-00002",
        4,
        &[("dev", 0), ("uat", 1), ("stage", 2), ("prod", 3), ("demo", 3)],
    );
    create_repo(first.path(), "Games-Ab1-H5-12345", 2, &[("dev", 0)]);
    create_repo(first.path(), "notes", 1, &[("dev", 0)]);
    std::fs::create_dir(first.path().join("Games-Nog-H5-00003")).unwrap();
    create_repo(second.path(), "Games-Aaa-H5-00001", 3, &[("prod", 0)]);

    let output = out.path().join("version.txt");
    let mut config = Config::default();
    config.branches.roots = vec![
        first.path().to_path_buf(),
        first.path().join("missing"),
        second.path().to_path_buf(),
    ];
    let args = BranchesArgs {
        roots: Vec::new(),
        output: Some(output.clone()),
        no_progress: true,
    };

    let tally = run_branches_command(&args, &config).await.unwrap();
    assert_eq!(tally.targets, 3);
    assert_eq!(tally.succeeded, 7);

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(!report.ends_with('\n'));
    insta::assert_snapshot!(report.replace('\t', "|"), @r"
    |dev|uat|stage|prod|demo
    Games-Ab1-H5-12345|2||||
    Games-Zz9-H5-00002|4|3|2|1|1
    Games-Aaa-H5-00001||||3|
    ");

    // A second run over unchanged repositories is byte-identical
    run_branches_command(&args, &config).await.unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), report);
}

#[tokio::test]
async fn test_cli_roots_replace_configured_roots() {
    let configured = temp_dir();
    let given = temp_dir();
    let out = temp_dir();
    create_repo(configured.path(), "Games-Cfg-H5-00001", 1, &[("dev", 0)]);
    create_repo(given.path(), "Games-Cli-H5-00002", 1, &[("dev", 0)]);

    let mut config = Config::default();
    config.branches.roots = vec![configured.path().to_path_buf()];
    let args = BranchesArgs {
        roots: vec![given.path().to_path_buf()],
        output: Some(out.path().join("version.txt")),
        no_progress: true,
    };

    run_branches_command(&args, &config).await.unwrap();
    let report = std::fs::read_to_string(out.path().join("version.txt")).unwrap();
    assert!(report.contains("Games-Cli-H5-00002"));
    assert!(!report.contains("Games-Cfg-H5-00001"));
}
