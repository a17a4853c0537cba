// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local branch scan.
//!
//! ```text
//! roots ──> RepoDiscovery ──> FanOut<BranchCounter> ──> BRANCHES layout ──> version.txt
//! ```

use anyhow::{Context, bail};
use tracing::info;

use super::{progress_display, tally_line};
use crate::cli::scan::BranchesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::discovery::RepoDiscovery;
use crate::git::query::BranchCounter;
use crate::report::Tally;
use crate::report::fanout::FanOut;
use crate::report::format::ReportLayout;
use crate::report::sink::ReportSink;

/// Scans every checkout under the configured roots and writes the report.
///
/// Zero checkouts under a non-empty root list is not an error: the report
/// then holds only the header.
///
/// # Errors
///
/// Returns an error, without touching the report, if no roots are configured
/// or the folder pattern is invalid. Also fails if the report cannot be written.
pub async fn run_branches_command(args: &BranchesArgs, config: &Config) -> Result<Tally> {
    let roots = if args.roots.is_empty() {
        &config.branches.roots
    } else {
        &args.roots
    };
    if roots.is_empty() {
        bail!("no roots configured; set branches.roots or pass --root");
    }
    let output = args.output.as_ref().unwrap_or(&config.branches.output);

    let discovery = RepoDiscovery::new(&config.branches.folder_pattern)?;
    let targets = discovery.discover(roots);
    info!(roots = roots.len(), repositories = targets.len(), "discovered checkouts");

    let counter = BranchCounter::builder()
        .with_remote(config.branches.remote.clone())
        .with_timeout(config.git_timeout())
        .build();
    let matrix = FanOut::new(&counter, &config.environments)
        .progress(progress_display(args.no_progress))
        .run(&targets)
        .await;

    let text = ReportLayout::BRANCHES.render(&matrix, &config.environments);
    ReportSink::new(output)
        .write(&text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let tally = matrix.tally();
    println!("{}", tally_line(&tally));
    println!("Results written to {}", output.display());
    Ok(tally)
}
