// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   branches, online, inspect, options
//! ```

pub mod branches;
pub mod inspect;
pub mod online;
pub mod options;

#[cfg(test)]
mod tests;

use crate::report::Tally;
use crate::report::fanout::ProgressDisplay;

const fn progress_display(no_progress: bool) -> ProgressDisplay {
    if no_progress {
        ProgressDisplay::Silent
    } else {
        ProgressDisplay::Bar
    }
}

/// One-line run summary printed after a batch scan.
#[must_use]
pub fn tally_line(tally: &Tally) -> String {
    use std::fmt::Write as _;
    let mut line = format!(
        "{} targets, {} queries: {} succeeded, {} failed",
        tally.targets, tally.queries, tally.succeeded, tally.failed
    );
    if tally.rejected > 0 {
        let _ = write!(line, " ({} skipped)", tally.rejected);
    }
    line
}
