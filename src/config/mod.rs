// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for verscan.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. verscan.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. VERSCAN__* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VERSCAN__BRANCHES__REMOTE=upstream   → branches.remote = "upstream"
//! VERSCAN__ONLINE__TIMEOUT_SECS=5      → online.timeout_secs = 5
//! ```
//!
//! # Environment Table
//!
//! ```toml
//! [[environments]]
//! name = "dev"
//! url = "https://download-dev.example.com"
//!
//! [[environments]]
//! name = "prod"
//! branch = "origin/master"   # default would be origin/prod
//! url = "https://download.example.com"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{BranchesConfig, EnvironmentTable, OnlineConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Local git branch scan.
    pub branches: BranchesConfig,
    /// Remote `version.json` scan.
    pub online: OnlineConfig,
    /// Ordered environment table shared by both scans.
    pub environments: EnvironmentTable,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use verscan::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("verscan.toml")
    ///     .with_env_prefix("VERSCAN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    #[must_use]
    pub const fn git_timeout(&self) -> Duration {
        Duration::from_secs(self.branches.timeout_secs)
    }

    #[must_use]
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.online.timeout_secs)
    }

    /// Validate cross-field invariants after all sources are merged.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty or ambiguous
    /// environment table, a bad folder pattern, or a zero timeout.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.environments.is_empty() {
            return Err(invalid("environments", "name", "at least one environment is required").into());
        }

        let mut seen = BTreeSet::new();
        for env in &self.environments {
            if env.name.trim().is_empty() {
                return Err(invalid("environments", "name", "environment name must not be empty").into());
            }
            if !seen.insert(env.name.as_str()) {
                return Err(invalid(
                    "environments",
                    "name",
                    &format!("duplicate environment '{}'", env.name),
                )
                .into());
            }
        }

        if let Err(e) = regex::Regex::new(&self.branches.folder_pattern) {
            return Err(invalid("branches", "folder_pattern", &e.to_string()).into());
        }
        if self.branches.remote.trim().is_empty() {
            return Err(invalid("branches", "remote", "remote name must not be empty").into());
        }
        if self.branches.timeout_secs == 0 {
            return Err(invalid("branches", "timeout_secs", "must be greater than zero").into());
        }
        if self.online.timeout_secs == 0 {
            return Err(invalid("online", "timeout_secs", "must be greater than zero").into());
        }
        Ok(())
    }

    /// Check that every environment has a base URL before a remote scan.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the first environment
    /// without a URL.
    pub fn require_urls(&self) -> std::result::Result<(), ConfigError> {
        match self.environments.iter().find(|env| env.url.trim().is_empty()) {
            Some(env) => Err(invalid(
                "environments",
                "url",
                &format!("environment '{}' has no url", env.name),
            )),
            None => Ok(()),
        }
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`; environments
    /// keep their table position in the key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        let roots = self
            .branches
            .roots
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        options.insert("branches.roots".to_string(), roots);
        options.insert("branches.remote".to_string(), self.branches.remote.clone());
        options.insert(
            "branches.folder_pattern".to_string(),
            self.branches.folder_pattern.clone(),
        );
        options.insert(
            "branches.output".to_string(),
            self.branches.output.display().to_string(),
        );
        options.insert(
            "branches.timeout_secs".to_string(),
            self.branches.timeout_secs.to_string(),
        );

        options.insert(
            "online.gid_file".to_string(),
            self.online.gid_file.display().to_string(),
        );
        options.insert(
            "online.output".to_string(),
            self.online.output.display().to_string(),
        );
        options.insert(
            "online.timeout_secs".to_string(),
            self.online.timeout_secs.to_string(),
        );
        options.insert(
            "online.strip_prefix".to_string(),
            self.online.strip_prefix.clone(),
        );

        for (i, env) in self.environments.iter().enumerate() {
            options.insert(
                format!("environments.{i}.{}", env.name),
                format!(
                    "branch={} url={}",
                    env.branch_ref(&self.branches.remote),
                    env.url
                ),
            );
        }

        options
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect()
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
