// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --set KEY=VAL     ← Direct config override (can repeat)
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: --set > VERSCAN__* env > --config > verscan.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "verscan.toml";

/// Prefix of `VERSCAN__SECTION__KEY` environment overrides.
pub const ENV_PREFIX: &str = "VERSCAN";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Sets an option, such as 'online.timeout_secs=20'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes the log file as JSON lines.
    #[arg(long = "log-json", requires = "log_file")]
    pub log_json: bool,

    /// Ignores verscan.toml in the current directory, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Layers every configuration source in precedence order.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` option is not a `section.key=value` pair.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = Config::builder();
        if !self.no_default_config {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        for path in &self.configs {
            loader = loader.add_toml_file(path);
        }
        loader = loader.with_env_prefix(ENV_PREFIX);
        for option in &self.options {
            loader = loader.set_assignment(option)?;
        }
        Ok(loader)
    }

    /// Loads and validates the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any source is unreadable or the merged result is invalid.
    pub fn load_config(&self) -> Result<Config> {
        self.config_loader()?.build()
    }
}
