// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   text:  read_nonblank_lines()  UTF-8 list files
//!          write_atomic()         temp file + rename
//! ```

pub mod fs;
