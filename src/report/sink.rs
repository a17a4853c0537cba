// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report output.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{ReportError, VerscanResult};
use crate::utility::fs::text::write_atomic;

/// Fixed, mode-specific report destination.
#[derive(Debug, Clone)]
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the report file with `text` (UTF-8).
    ///
    /// # Errors
    ///
    /// Returns a `ReportError::WriteFailed` if the file cannot be written.
    pub fn write(&self, text: &str) -> VerscanResult<()> {
        write_atomic(&self.path, text).map_err(|source| ReportError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = text.len(), "report written");
        Ok(())
    }
}
