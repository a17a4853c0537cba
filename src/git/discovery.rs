// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git repository discovery.
//!
//! ```text
//! root/
//!   Games-Ab1-H5-12345/   (included: name matches, has .git)
//!     .git/
//!   Games-Cd2-H5-00001/   (skipped, no .git)
//!   Games-xx-H5-1/        (skipped, name)
//!   notes/                (skipped, name)
//!   .cache/               (skipped, hidden)
//! ```
//!
//! Children are sorted by name within a root; roots keep their given order.

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, DiscoveryError};
use crate::report::Target;

/// Finds repository checkouts under configured roots.
#[derive(Debug, Clone)]
pub struct RepoDiscovery {
    pattern: Regex,
}

impl RepoDiscovery {
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if `pattern` is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            section: "branches".to_string(),
            key: "folder_pattern".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { pattern })
    }

    /// Returns `true` if a directory name follows the checkout naming contract.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Discovers targets under every root, in root order.
    #[must_use]
    pub fn discover(&self, roots: &[PathBuf]) -> Vec<Target> {
        roots
            .iter()
            .flat_map(|root| self.find_repositories(root))
            .map(Target::Repository)
            .collect()
    }

    /// Lists the matching checkouts directly below `root`.
    ///
    /// A missing, non-directory or unreadable root yields no repositories.
    #[must_use]
    pub fn find_repositories(&self, root: &Path) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "root not scanned");
                return Vec::new();
            }
        };

        let mut repos = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "failed to read entry");
                    continue;
                }
            };
            let path = entry.path();

            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') || !self.matches(name) {
                continue;
            }
            if !path.is_dir() || !has_git_entry(&path) {
                debug!(path = %path.display(), "not a checkout");
                continue;
            }

            repos.push(path);
        }

        repos.sort();
        repos
    }
}

/// `.git` may be a directory or a worktree/submodule gitfile.
fn has_git_entry(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Checks that `path` is an existing directory containing `.git`.
///
/// # Errors
///
/// Returns the first violated condition as a `DiscoveryError`.
pub fn validate_repository(path: &Path) -> Result<(), DiscoveryError> {
    let display = || path.display().to_string();
    if !path.exists() {
        return Err(DiscoveryError::PathMissing { path: display() });
    }
    if !path.is_dir() {
        return Err(DiscoveryError::NotADirectory { path: display() });
    }
    if !has_git_entry(path) {
        return Err(DiscoveryError::NotARepository { path: display() });
    }
    Ok(())
}
