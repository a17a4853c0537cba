// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::scan::{BranchesArgs, InspectArgs, OnlineArgs};
use crate::cmd::branches::run_branches_command;
use crate::cmd::inspect::{InspectOutcome, format_summary, run_inspect_command};
use crate::cmd::online::{read_game_ids, run_online_command};
use crate::cmd::tally_line;
use crate::config::Config;
use crate::report::{FailureKind, QueryResult, Tally, Target};

#[test]
fn test_tally_line() {
    let tally = Tally {
        targets: 3,
        rejected: 1,
        queries: 15,
        succeeded: 9,
        failed: 6,
    };
    insta::assert_snapshot!(
        tally_line(&tally),
        @"3 targets, 15 queries: 9 succeeded, 6 failed (1 skipped)"
    );
    insta::assert_snapshot!(
        tally_line(&Tally::default()),
        @"0 targets, 0 queries: 0 succeeded, 0 failed"
    );
}

#[test]
fn test_format_summary() {
    let results = vec![
        ("origin/dev".to_string(), QueryResult::Value(812)),
        ("origin/prod".to_string(), QueryResult::Failed(FailureKind::Transport)),
    ];
    insta::assert_snapshot!(format_summary(&results), @r"
    ============================================================
    Commit counts per branch:
    ============================================================
    origin/dev: 812
    origin/prod: failed (transport-error)
    ============================================================
    ");
}

#[test]
fn test_read_game_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gid.txt");
    std::fs::write(&path, "Games-S5G-H5-99963\n\n  Games-Ab1-H5-12345  \n").unwrap();

    assert_eq!(
        read_game_ids(&path),
        [
            Target::Game("Games-S5G-H5-99963".to_string()),
            Target::Game("Games-Ab1-H5-12345".to_string()),
        ]
    );
    assert!(read_game_ids(&dir.path().join("missing.txt")).is_empty());
}

#[tokio::test]
async fn test_online_without_ids_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let gid_file = dir.path().join("gid.txt");
    std::fs::write(&gid_file, "\n   \n").unwrap();
    let output = dir.path().join("output.txt");

    let args = OnlineArgs {
        gid_file: Some(gid_file),
        output: Some(output.clone()),
        no_progress: true,
    };
    let err = run_online_command(&args, &Config::default())
        .await
        .expect_err("empty id list should fail");

    assert!(err.to_string().contains("no game ids"), "{err}");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_branches_without_checkouts_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("version.txt");

    let args = BranchesArgs {
        roots: vec![dir.path().join("missing")],
        output: Some(output.clone()),
        no_progress: true,
    };
    let tally = run_branches_command(&args, &Config::default())
        .await
        .expect("missing root is not an error");

    assert_eq!(tally, Tally::default());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "\tdev\tuat\tstage\tprod\tdemo"
    );
}

#[tokio::test]
async fn test_branches_without_roots_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("version.txt");

    let args = BranchesArgs {
        roots: Vec::new(),
        output: Some(output.clone()),
        no_progress: true,
    };
    let err = run_branches_command(&args, &Config::default())
        .await
        .expect_err("no roots should fail");

    assert!(err.to_string().contains("no roots configured"), "{err}");
    assert!(!output.exists());
}

#[tokio::test]
async fn test_inspect_rejects_plain_directory() {
    let dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        folder: Some(dir.path().to_path_buf()),
        no_pause: true,
    };

    let outcome = run_inspect_command(&args, &Config::default())
        .await
        .expect("the diagnostic is reported, not returned");
    assert_eq!(outcome, InspectOutcome::Rejected);
}
