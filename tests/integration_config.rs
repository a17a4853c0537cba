// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML files and layering.

use std::path::{Path, PathBuf};
use verscan::config::Config;

fn example_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("verscan.example.toml")
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_example_file_matches_defaults() {
    let config = Config::from_file(example_file()).unwrap();

    let mut expected = Config::default();
    expected.branches.roots = vec![
        PathBuf::from("D:/2dx"),
        PathBuf::from("D:/cc_new"),
        PathBuf::from("D:/Jenkins"),
    ];
    assert_eq!(config, expected);
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn config_optional_file_may_be_absent() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("local.toml");
    std::fs::write(
        &local,
        "[branches]\nremote = \"upstream\"\n\n[online]\ntimeout_secs = 3\n",
    )
    .unwrap();

    let config = Config::builder()
        .add_toml_file(example_file())
        .add_toml_file(&local)
        .set_assignment("online.output=report.tsv")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.branches.remote, "upstream");
    assert_eq!(config.branches.roots.len(), 3);
    assert_eq!(config.online.timeout_secs, 3);
    assert_eq!(config.online.output, PathBuf::from("report.tsv"));
    assert_eq!(config.environments.len(), 5);
}

#[test]
fn config_environment_table_is_replaced_not_merged() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("local.toml");
    std::fs::write(
        &local,
        "[[environments]]\nname = \"qa\"\nurl = \"https://qa.example.com\"\n",
    )
    .unwrap();

    let config = Config::builder()
        .add_toml_file(example_file())
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.environments.names().collect::<Vec<_>>(), ["qa"]);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn config_rejects_invalid_files() {
    let cases = [
        ("unknown key", "[online]\nretries = 3\n"),
        ("zero timeout", "[branches]\ntimeout_secs = 0\n"),
        ("bad pattern", "[branches]\nfolder_pattern = \"([\"\n"),
        (
            "duplicate env",
            "[[environments]]\nname = \"dev\"\nurl = \"a\"\n[[environments]]\nname = \"dev\"\nurl = \"b\"\n",
        ),
    ];

    let dir = tempfile::tempdir().unwrap();
    for (label, body) in cases {
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, body).unwrap();
        assert!(Config::from_file(&path).is_err(), "{label} should be rejected");
    }
}
