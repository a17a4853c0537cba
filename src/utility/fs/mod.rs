// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for line-oriented inputs and whole-file outputs.
//!
//! ```text
//! text:  read_nonblank_lines()  trimmed, blank lines dropped, BOM stripped
//!        write_atomic()         NamedTempFile in target dir --> persist()
//! ```

pub mod text;
