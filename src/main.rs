// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Version | Options | Branches | Online | Inspect
//! ```

use std::process::ExitCode;

use verscan::cli::global::GlobalOptions;
use verscan::cli::{self, Command};
use verscan::cmd::branches::run_branches_command;
use verscan::cmd::inspect::{InspectOutcome, run_inspect_command};
use verscan::cmd::online::run_online_command;
use verscan::cmd::options::run_options_command;
use verscan::config::Config;
use verscan::logging::init_logging;
use verscan::logging::{LogConfig, LogFormat, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    let file_format = if global.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_file_format(file_format)
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Options) => load_config(&cli.global).map(|config| {
            run_options_command(&config);
            ExitCode::SUCCESS
        }),
        Some(Command::Branches(args)) => match load_config(&cli.global) {
            Ok(config) => run_branches_command(args, &config)
                .await
                .map(|_| ExitCode::SUCCESS),
            Err(e) => Err(e),
        },
        Some(Command::Online(args)) => match load_config(&cli.global) {
            Ok(config) => run_online_command(args, &config)
                .await
                .map(|_| ExitCode::SUCCESS),
            Err(e) => Err(e),
        },
        Some(Command::Inspect(args)) => match load_config(&cli.global) {
            // Rejected folders have printed their own diagnostic
            Ok(config) => run_inspect_command(args, &config)
                .await
                .map(|outcome| match outcome {
                    InspectOutcome::Checked => ExitCode::SUCCESS,
                    InspectOutcome::Rejected => ExitCode::FAILURE,
                }),
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn load_config(global: &GlobalOptions) -> verscan::error::Result<Config> {
    global.load_config().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
