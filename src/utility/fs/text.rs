// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Reads a UTF-8 text file and returns its non-blank lines, trimmed.
///
/// A leading byte-order mark is ignored. Line order is preserved.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read or is not
/// valid UTF-8.
pub fn read_nonblank_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Replaces `path` with `contents` in one step.
///
/// The text is written to a temporary file next to `path` and then renamed
/// over it, so readers see either the old file or the complete new one.
///
/// # Errors
///
/// Returns the underlying I/O error if the temporary file cannot be created,
/// written, or moved into place.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
