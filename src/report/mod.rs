// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query results and the per-run result matrix.
//!
//! ```text
//! targets ──> FanOut::run ──> ResultMatrix ──> ReportLayout::render ──> ReportSink
//!               |                 |
//!   QueryExecutor::validate   Target -> TargetRow
//!   QueryExecutor::query        rejection: Option<DiscoveryError>
//!                               results:   env name -> QueryResult
//! ```
//!
//! A [`ResultMatrix`] is built fresh for every run and has exactly one
//! [`QueryResult`] per (target, environment) once [`fanout::FanOut::run`]
//! returns.

pub mod fanout;
pub mod format;
pub mod sink;


use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use crate::config::types::{Environment, EnvironmentTable};
use crate::error::{DiscoveryError, NetworkError, ProcessError};

/// A queried unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Local checkout, keyed by its full path.
    Repository(PathBuf),
    /// Remote game identifier, e.g. `Games-S5G-H5-99963`.
    Game(String),
}

impl Target {
    /// Stable identity used for map keys and lexicographic ordering.
    #[must_use]
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Repository(path) => path.to_string_lossy(),
            Self::Game(id) => Cow::Borrowed(id),
        }
    }

    /// First report column: the folder name for repositories, the raw id for games.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        match self {
            Self::Repository(path) => path
                .file_name()
                .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy()),
            Self::Game(id) => Cow::Borrowed(id),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Why a single query produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Timeout,
    NotFound,
    Transport,
    Parse,
    NonGitPath,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::NotFound => "not-found",
            Self::Transport => "transport-error",
            Self::Parse => "parse-error",
            Self::NonGitPath => "non-git-path",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ProcessError> for FailureKind {
    fn from(err: &ProcessError) -> Self {
        match err {
            ProcessError::ExecutableNotFound { .. } => Self::NotFound,
            ProcessError::Timeout { .. } => Self::Timeout,
            ProcessError::SpawnFailed { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::NotFound
            }
            ProcessError::UnexpectedOutput { .. } => Self::Parse,
            ProcessError::SpawnFailed { .. }
            | ProcessError::NonZeroExit { .. }
            | ProcessError::OutputError { .. } => Self::Transport,
        }
    }
}

impl From<&NetworkError> for FailureKind {
    fn from(err: &NetworkError) -> Self {
        match err {
            NetworkError::Timeout { .. } => Self::Timeout,
            NetworkError::Reqwest(e) if e.is_timeout() => Self::Timeout,
            NetworkError::Reqwest(e) if e.is_decode() => Self::Parse,
            NetworkError::MalformedBody { .. } | NetworkError::MissingField { .. } => Self::Parse,
            NetworkError::HttpError { .. } | NetworkError::Reqwest(_) => Self::Transport,
        }
    }
}

impl From<&DiscoveryError> for FailureKind {
    fn from(_: &DiscoveryError) -> Self {
        Self::NonGitPath
    }
}

/// Outcome of one (target, environment) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryResult {
    Value(u64),
    Failed(FailureKind),
}

impl QueryResult {
    #[must_use]
    pub const fn value(&self) -> Option<u64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Failed(kind) => write!(f, "failed ({kind})"),
        }
    }
}

impl<E> From<Result<u64, E>> for QueryResult
where
    for<'a> FailureKind: From<&'a E>,
{
    fn from(result: Result<u64, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(err) => Self::Failed(FailureKind::from(&err)),
        }
    }
}

/// Performs exactly one query per call. One attempt, one outcome.
pub trait QueryExecutor {
    /// Checks a target before any environment is queried.
    ///
    /// An error short-circuits every environment for that target.
    ///
    /// # Errors
    ///
    /// Returns the [`DiscoveryError`] that makes the target unqueryable.
    fn validate(&self, _target: &Target) -> Result<(), DiscoveryError> {
        Ok(())
    }

    /// Queries one environment of one target.
    fn query(&self, target: &Target, environment: &Environment) -> impl Future<Output = QueryResult>;
}

/// All results for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRow {
    rejection: Option<DiscoveryError>,
    results: IndexMap<String, QueryResult>,
}

impl TargetRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A row whose target failed validation: every environment records
    /// [`FailureKind::NonGitPath`] without being queried.
    #[must_use]
    pub fn rejected(error: DiscoveryError, environments: &EnvironmentTable) -> Self {
        let kind = FailureKind::from(&error);
        Self {
            results: environments
                .names()
                .map(|name| (name.to_string(), QueryResult::Failed(kind)))
                .collect(),
            rejection: Some(error),
        }
    }

    /// Stores a result; a repeated environment keeps its position and the
    /// latest value.
    pub fn record(&mut self, environment: impl Into<String>, result: QueryResult) {
        self.results.insert(environment.into(), result);
    }

    #[must_use]
    pub fn get(&self, environment: &str) -> Option<&QueryResult> {
        self.results.get(environment)
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&DiscoveryError> {
        self.rejection.as_ref()
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub fn results(&self) -> impl Iterator<Item = (&str, &QueryResult)> {
        self.results.iter().map(|(name, result)| (name.as_str(), result))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Success/failure counts over a whole matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub targets: usize,
    pub rejected: usize,
    pub queries: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Target -> (environment -> result), in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMatrix {
    rows: IndexMap<Target, TargetRow>,
}

impl ResultMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a row. A duplicated target keeps its first position and the
    /// last row written.
    pub fn insert(&mut self, target: Target, row: TargetRow) {
        self.rows.insert(target, row);
    }

    #[must_use]
    pub fn row(&self, target: &Target) -> Option<&TargetRow> {
        self.rows.get(target)
    }

    #[must_use]
    pub fn get(&self, target: &Target, environment: &str) -> Option<&QueryResult> {
        self.rows.get(target).and_then(|row| row.get(environment))
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&Target, &TargetRow)> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts queries actually issued; rejected targets count once each and
    /// contribute no queries.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally {
            targets: self.rows.len(),
            ..Tally::default()
        };
        for row in self.rows.values() {
            if row.is_rejected() {
                tally.rejected += 1;
                continue;
            }
            for (_, result) in row.results() {
                tally.queries += 1;
                if result.is_success() {
                    tally.succeeded += 1;
                } else {
                    tally.failed += 1;
                }
            }
        }
        tally
    }
}
