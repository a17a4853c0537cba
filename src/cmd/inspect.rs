// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive check of a single checkout.
//!
//! ```text
//! inspect [FOLDER]  (default: current directory)
//!   validate ── invalid ──> diagnostic, wait for Enter, Rejected
//!   for env: git rev-list --count <remote>/<env>   (printed as it goes)
//!   summary table
//!   wait for Enter (unless --no-pause)
//! ```

use anyhow::Context;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::scan::InspectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::query::BranchCounter;
use crate::report::{QueryExecutor, QueryResult, Target};

const RULE_WIDTH: usize = 60;

/// How an inspection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectOutcome {
    Checked,
    /// The folder is unusable; the diagnostic has already been printed.
    Rejected,
}

/// Renders the per-branch summary block.
#[must_use]
pub fn format_summary(results: &[(String, QueryResult)]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut text = format!("{rule}\nCommit counts per branch:\n{rule}\n");
    for (branch, result) in results {
        let _ = writeln!(text, "{branch:10}: {result}");
    }
    text.push_str(&rule);
    text
}

fn resolve_folder(folder: Option<&PathBuf>) -> Result<PathBuf> {
    let folder = match folder {
        Some(folder) => folder.clone(),
        None => {
            println!("No folder given, using the current directory");
            std::env::current_dir().context("failed to read the current directory")?
        }
    };
    Ok(std::path::absolute(&folder).unwrap_or(folder))
}

async fn wait_for_enter(no_pause: bool) {
    if no_pause {
        return;
    }
    println!("\nPress Enter to exit...");
    let mut line = String::new();
    let _ = BufReader::new(tokio::io::stdin()).read_line(&mut line).await;
}

/// Prints the commit count of every environment branch of one checkout.
///
/// An unusable folder yields [`InspectOutcome::Rejected`] once its
/// diagnostic has been printed and acknowledged.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read.
pub async fn run_inspect_command(args: &InspectArgs, config: &Config) -> Result<InspectOutcome> {
    let folder = resolve_folder(args.folder.as_ref())?;
    let target = Target::Repository(folder.clone());

    let counter = BranchCounter::builder()
        .with_remote(config.branches.remote.clone())
        .with_timeout(config.git_timeout())
        .build();

    if let Err(error) = counter.validate(&target) {
        println!("Error: {error}");
        wait_for_enter(args.no_pause).await;
        return Ok(InspectOutcome::Rejected);
    }

    let rule = "=".repeat(RULE_WIDTH);
    println!("\nChecking repository: {}", folder.display());
    println!("{rule}");

    let mut results = Vec::with_capacity(config.environments.len());
    for env in &config.environments {
        let branch = env.branch_ref(counter.remote());
        print!("Checking branch {branch}... ");
        let _ = std::io::stdout().flush();
        let result = counter.query(&target, env).await;
        println!("{result}");
        results.push((branch, result));
    }

    println!("\n{}", format_summary(&results));
    wait_for_enter(args.no_pause).await;
    Ok(InspectOutcome::Checked)
}
