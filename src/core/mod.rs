// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core runtime plumbing.
//!
//! ```text
//!   core
//!    |
//!    v
//!  process
//!    |
//!  Builder, Output, deadline kill
//! ```

pub mod process;
