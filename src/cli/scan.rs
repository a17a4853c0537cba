// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command arguments.
//!
//! ```text
//! branches [--root DIR]... [--output FILE] [--no-progress]
//!   → git rev-list counts for every checkout under the roots
//! online [--gid-file FILE] [--output FILE] [--no-progress]
//!   → published rev of every listed game
//! inspect [FOLDER] [--no-pause]
//!   → counts for one checkout, printed to the console
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `branches` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BranchesArgs {
    /// Root directory to scan; replaces `branches.roots` (can repeat).
    #[arg(short = 'r', long = "root", value_name = "DIR", action = clap::ArgAction::Append)]
    pub roots: Vec<PathBuf>,

    /// Report path; overrides `branches.output`.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hides the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the `online` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OnlineArgs {
    /// Game id list; overrides `online.gid_file`.
    #[arg(short = 'g', long = "gid-file", value_name = "FILE")]
    pub gid_file: Option<PathBuf>,

    /// Report path; overrides `online.output`.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hides the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InspectArgs {
    /// Checkout to inspect (defaults to the current directory).
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Exits without waiting for Enter.
    #[arg(long = "no-pause")]
    pub no_pause: bool,
}
