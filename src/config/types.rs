// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for verscan.
//!
//! # Config Structure
//!
//! ```text
//! Config: BranchesConfig, OnlineConfig, EnvironmentTable
//! EnvironmentTable: ordered [[environments]] (name, branch?, url)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name contract for repository checkouts: `Games-XXX-H5-NNNNN`.
pub const DEFAULT_FOLDER_PATTERN: &str = r"^Games-[A-Za-z0-9]{3}-H5-\d{5}$";

/// Settings for the local git branch scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BranchesConfig {
    /// Root directories whose immediate children are scanned.
    pub roots: Vec<PathBuf>,
    /// Remote whose tracking branches are counted.
    pub remote: String,
    /// Regex a child directory name must match to be a target.
    pub folder_pattern: String,
    /// Report path.
    pub output: PathBuf,
    /// Deadline for one `git rev-list` invocation.
    pub timeout_secs: u64,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            remote: "origin".to_string(),
            folder_pattern: DEFAULT_FOLDER_PATTERN.to_string(),
            output: PathBuf::from("version.txt"),
            timeout_secs: 30,
        }
    }
}

/// Settings for the remote `version.json` scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnlineConfig {
    /// File listing one game ID per line.
    pub gid_file: PathBuf,
    /// Report path.
    pub output: PathBuf,
    /// Deadline for one HTTP request.
    pub timeout_secs: u64,
    /// Prefix removed from a game ID to form its URL path segment.
    pub strip_prefix: String,
}

impl Default for OnlineConfig {
    fn default() -> Self {
        Self {
            gid_file: PathBuf::from("gid.txt"),
            output: PathBuf::from("output.txt"),
            timeout_secs: 10,
            strip_prefix: "Games-".to_string(),
        }
    }
}

/// One deployment stage: its column label, git branch and download host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Environment {
    /// Column label, e.g. `dev`.
    pub name: String,
    /// Explicit branch ref; defaults to `<remote>/<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Base URL hosting `<game>/version.json`.
    #[serde(default)]
    pub url: String,
}

impl Environment {
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch: None,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// The remote-tracking ref counted for this environment.
    #[must_use]
    pub fn branch_ref(&self, remote: &str) -> String {
        self.branch
            .clone()
            .unwrap_or_else(|| format!("{remote}/{}", self.name))
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Ordered environment table. Order is the report column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentTable(Vec<Environment>);

impl Default for EnvironmentTable {
    fn default() -> Self {
        Self(vec![
            Environment::new("dev", "https://download-dev.5gg.win"),
            Environment::new("uat", "https://download-uat.5gg.win"),
            Environment::new("stage", "https://download-hk.5gg.dev"),
            Environment::new("prod", "https://download.figoogoo.com"),
            Environment::new("demo", "https://download-hk.5gg.dev"),
        ])
    }
}

impl EnvironmentTable {
    #[must_use]
    pub const fn new(environments: Vec<Environment>) -> Self {
        Self(environments)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Environment> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column labels in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|env| env.name.as_str())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Environment> {
        self.0.iter().find(|env| env.name == name)
    }
}

impl<'a> IntoIterator for &'a EnvironmentTable {
    type Item = &'a Environment;
    type IntoIter = std::slice::Iter<'a, Environment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
