// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local repository scanning.
//!
//! ```text
//!   roots ──> discovery.rs ──> [Target::Repository]
//!                                   |
//!                                   v
//!   query.rs  BranchCounter: QueryExecutor
//!               validate: exists, is dir, has .git
//!               query:    git rev-list --count <remote>/<env>
//! ```

pub mod discovery;
pub mod query;
