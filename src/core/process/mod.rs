// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning with deadlines.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .timeout() .capture_output()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr
//!           kill on deadline
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
