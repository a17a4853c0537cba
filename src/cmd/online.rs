// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote version scan.
//!
//! ```text
//! gid.txt ──> [Target::Game] ──> FanOut<VersionProbe> ──> ONLINE layout ──> output.txt
//!   empty list: no report, exit failure
//! ```

use anyhow::{Context, bail};
use std::path::Path;
use tracing::{info, warn};

use super::{progress_display, tally_line};
use crate::cli::scan::OnlineArgs;
use crate::config::Config;
use crate::error::Result;
use crate::net::version::VersionProbe;
use crate::report::fanout::FanOut;
use crate::report::format::ReportLayout;
use crate::report::sink::ReportSink;
use crate::report::{Tally, Target};
use crate::utility::fs::text::read_nonblank_lines;

/// Reads the game id list. An unreadable file yields no ids.
#[must_use]
pub fn read_game_ids(path: &Path) -> Vec<Target> {
    match read_nonblank_lines(path) {
        Ok(ids) => ids.into_iter().map(Target::Game).collect(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read game id list");
            Vec::new()
        }
    }
}

/// Fetches the published revision of every listed game and writes the report.
///
/// # Errors
///
/// Returns an error if an environment has no URL, the id list yields no
/// targets (no report is written), or the report cannot be written.
pub async fn run_online_command(args: &OnlineArgs, config: &Config) -> Result<Tally> {
    config.require_urls()?;
    let gid_file = args.gid_file.as_ref().unwrap_or(&config.online.gid_file);
    let output = args.output.as_ref().unwrap_or(&config.online.output);

    let targets = read_game_ids(gid_file);
    if targets.is_empty() {
        bail!("no game ids found in {}", gid_file.display());
    }
    info!(games = targets.len(), "loaded game ids");
    println!(
        "Found {} game ids, environments: {}",
        targets.len(),
        config.environments.names().collect::<Vec<_>>().join(", ")
    );

    let probe = VersionProbe::builder()
        .with_strip_prefix(config.online.strip_prefix.clone())
        .with_timeout(config.http_timeout())
        .build();
    let matrix = FanOut::new(&probe, &config.environments)
        .progress(progress_display(args.no_progress))
        .run(&targets)
        .await;

    let text = ReportLayout::ONLINE.render(&matrix, &config.environments);
    ReportSink::new(output)
        .write(&text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let tally = matrix.tally();
    println!("{}", tally_line(&tally));
    println!("Results written to {}", output.display());
    Ok(tally)
}
