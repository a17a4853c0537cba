// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential fan-out of targets x environments.
//!
//! ```text
//! for target in targets           (discovery order)
//!   validate(target)?  ── Err ──> TargetRow::rejected (no queries)
//!   for env in environments       (table order)
//!     query(target, env).await    (one at a time)
//!     row.record(env, result)
//!   matrix.insert(target, row)
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use super::{QueryExecutor, QueryResult, ResultMatrix, Target, TargetRow};
use crate::config::types::EnvironmentTable;

/// Progress display style for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Progress bar over all (target, environment) pairs
    #[default]
    Bar,
    /// Log lines only
    Silent,
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Drives one executor over every (target, environment) pair.
///
/// # Example
/// ```ignore
/// let matrix = FanOut::new(&executor, &config.environments)
///     .silent()
///     .run(&targets)
///     .await;
/// ```
pub struct FanOut<'a, Q> {
    executor: &'a Q,
    environments: &'a EnvironmentTable,
    progress: ProgressDisplay,
}

impl<'a, Q: QueryExecutor> FanOut<'a, Q> {
    #[must_use]
    pub const fn new(executor: &'a Q, environments: &'a EnvironmentTable) -> Self {
        Self {
            executor,
            environments,
            progress: ProgressDisplay::Bar,
        }
    }

    #[must_use]
    pub const fn progress(mut self, display: ProgressDisplay) -> Self {
        self.progress = display;
        self
    }

    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress = ProgressDisplay::Silent;
        self
    }

    fn create_progress_bar(&self, total: u64) -> Option<ProgressBar> {
        match self.progress {
            ProgressDisplay::Silent => None,
            ProgressDisplay::Bar => {
                let pb = ProgressBar::new(total);
                pb.set_style(bar_style());
                Some(pb)
            }
        }
    }

    /// Queries every pair and returns the complete matrix.
    ///
    /// Failures are recorded, never propagated: every target ends up with
    /// exactly one result per environment.
    pub async fn run(&self, targets: &[Target]) -> ResultMatrix {
        let env_count = self.environments.len() as u64;
        let progress = self.create_progress_bar(targets.len() as u64 * env_count);
        let suspend = |f: &dyn Fn()| match &progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        };

        let mut matrix = ResultMatrix::new();

        for (index, target) in targets.iter().enumerate() {
            let position = index + 1;
            suspend(&|| info!(id = %target, "[{position}/{}] scanning", targets.len()));
            if let Some(pb) = &progress {
                pb.set_message(target.display_name().into_owned());
            }

            if let Err(error) = self.executor.validate(target) {
                suspend(&|| warn!(id = %target, %error, "skipping target"));
                matrix.insert(
                    target.clone(),
                    TargetRow::rejected(error, self.environments),
                );
                if let Some(pb) = &progress {
                    pb.inc(env_count);
                }
                continue;
            }

            let mut row = TargetRow::new();
            for env in self.environments {
                let result = self.executor.query(target, env).await;
                match result {
                    QueryResult::Value(value) => {
                        suspend(&|| debug!(id = %target, env = %env.name, value, "ok"));
                    }
                    QueryResult::Failed(kind) => {
                        suspend(&|| debug!(id = %target, env = %env.name, %kind, "failed"));
                    }
                }
                row.record(env.name.clone(), result);
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
            }
            matrix.insert(target.clone(), row);
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let tally = matrix.tally();
        info!(
            targets = tally.targets,
            rejected = tally.rejected,
            queries = tally.queries,
            succeeded = tally.succeeded,
            failed = tally.failed,
            "scan finished"
        );
        matrix
    }
}
