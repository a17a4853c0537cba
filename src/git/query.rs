// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit counting through the git CLI.
//!
//! ```text
//! BranchCounter::query(repo, env)
//!   git rev-list --count <remote>/<env>     cwd = repo, deadline
//!     exit 0, digits  --> Value(n)
//!     exit != 0       --> transport-error   (stderr logged by the runner)
//!     deadline        --> timeout
//!     no git          --> not-found
//!     other stdout    --> parse-error
//! ```

use bon::Builder;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::discovery::validate_repository;
use crate::config::types::Environment;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{DiscoveryError, ProcessError, VerscanError};
use crate::report::{FailureKind, QueryExecutor, QueryResult, Target};

/// Keeps git from blocking on credential prompts.
const NON_INTERACTIVE_ENV: [(&str, &str); 2] =
    [("GIT_TERMINAL_PROMPT", "0"), ("GCM_INTERACTIVE", "never")];

/// Counts commits reachable from each environment's remote-tracking branch.
#[derive(Debug, Clone, Builder)]
pub struct BranchCounter {
    #[builder(setters(name = with_remote), into, default = "origin".to_string())]
    remote: String,
    #[builder(setters(name = with_timeout), default = Duration::from_secs(30))]
    timeout: Duration,
    /// Git executable; a bare name is looked up on PATH once and cached.
    #[builder(setters(name = with_program), into, default = PathBuf::from("git"))]
    program: PathBuf,
}

impl BranchCounter {
    #[must_use]
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Runs `git rev-list --count <branch>` inside `repo`.
    ///
    /// # Errors
    ///
    /// Returns the `ProcessError` of a failed lookup or invocation, or
    /// `ProcessError::UnexpectedOutput` if stdout is not a non-negative integer.
    pub async fn count_commits(&self, repo: &Path, branch: &str) -> Result<u64, ProcessError> {
        let command = format!("git rev-list --count {branch}");
        let mut builder = ProcessBuilder::which(&self.program)?
            .name("git")
            .args(["rev-list", "--count", branch])
            .cwd(repo)
            .timeout(self.timeout)
            .capture_output();
        for (key, value) in NON_INTERACTIVE_ENV {
            builder = builder.env(key, value);
        }

        let output = builder.run().await.map_err(|err| match err {
            VerscanError::Process(e) => *e,
            other => ProcessError::OutputError {
                command: command.clone(),
                message: other.to_string(),
            },
        })?;

        parse_count(output.stdout()).ok_or_else(|| ProcessError::UnexpectedOutput {
            command,
            output: output.stdout().trim().to_string(),
        })
    }
}

/// Parses trimmed stdout as a decimal count. Signs are rejected.
#[must_use]
pub fn parse_count(stdout: &str) -> Option<u64> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl QueryExecutor for BranchCounter {
    fn validate(&self, target: &Target) -> Result<(), DiscoveryError> {
        match target {
            Target::Repository(path) => validate_repository(path),
            Target::Game(id) => Err(DiscoveryError::NotARepository { path: id.clone() }),
        }
    }

    async fn query(&self, target: &Target, environment: &Environment) -> QueryResult {
        let Target::Repository(repo) = target else {
            return QueryResult::Failed(FailureKind::NonGitPath);
        };
        let branch = environment.branch_ref(&self.remote);
        QueryResult::from(self.count_commits(repo, &branch).await)
    }
}
