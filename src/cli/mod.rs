// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for verscan using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! verscan [global options] <command>
//! version
//! options
//! branches [--root DIR]... [--output FILE]
//! online [--gid-file FILE] [--output FILE]
//! inspect [FOLDER] [--no-pause]
//! ```

pub mod global;
pub mod scan;


use crate::cli::global::GlobalOptions;
use crate::cli::scan::{BranchesArgs, InspectArgs, OnlineArgs};
use clap::{Parser, Subcommand};

/// Game version scanner
///
/// Reports per-environment build numbers of H5 game projects.
#[derive(Debug, Parser)]
#[command(
    name = "verscan",
    author,
    version,
    about = "Game version scanner",
    long_about = "verscan Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reports the build number of every game project in every\n\
                  deployment environment (dev, uat, stage, prod, demo), either\n\
                  from local git checkouts or from the published version.json.",
    after_help = "CONFIG FILES:\n\n\
                  verscan reads `verscan.toml` from the current directory when it\n\
                  exists, then every file given with --config, then VERSCAN__SECTION__KEY\n\
                  environment variables, then --set options. Use `verscan options`\n\
                  to print the effective settings."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Counts commits on every environment branch of every local checkout.
    Branches(BranchesArgs),

    /// Fetches the published revision of every listed game.
    Online(OnlineArgs),

    /// Shows the environment branch counts of one checkout.
    Inspect(InspectArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
