// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        branches / online / inspect
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, layered settings,  |
//!              |   [[environments]] table  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               git          net     report
//!           discovery,    version   FanOut, matrix,
//!          rev-list count   .json   layouts, sink
//!
//!   +-----------------------------------------+
//!   |  core   process (tokio, deadlines)      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod net;
pub mod report;
pub mod utility;
