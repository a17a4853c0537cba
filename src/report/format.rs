// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transposed tab-separated rendering of a [`ResultMatrix`].
//!
//! ```text
//!                     \tdev\tuat\tstage\tprod\tdemo
//! Games-Ab1-H5-12345  \t812\t809\t\t800\t
//! ```
//!
//! Lines are joined with `\n` and the text has no trailing newline.

use super::{QueryResult, ResultMatrix, Target, TargetRow};
use crate::config::types::EnvironmentTable;

/// Order of report body rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Discovery order.
    Insertion,
    /// Byte order of the target key.
    Lexicographic,
}

/// Treatment of targets that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedRows {
    Omit,
    Blank,
}

/// One report shape. The two scan modes deliberately use different ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    pub order: RowOrder,
    pub rejected: RejectedRows,
}

impl ReportLayout {
    /// Local branch scan: discovery order, unusable repositories hidden.
    pub const BRANCHES: Self = Self {
        order: RowOrder::Insertion,
        rejected: RejectedRows::Omit,
    };

    /// Remote scan: sorted by game id, every id shown even if all queries failed.
    pub const ONLINE: Self = Self {
        order: RowOrder::Lexicographic,
        rejected: RejectedRows::Blank,
    };

    /// Renders the header row and one row per reported target.
    #[must_use]
    pub fn render(&self, matrix: &ResultMatrix, environments: &EnvironmentTable) -> String {
        let mut lines = Vec::with_capacity(matrix.len() + 1);
        lines.push(header(environments));

        let mut rows: Vec<(&Target, &TargetRow)> = matrix
            .rows()
            .filter(|(_, row)| self.rejected == RejectedRows::Blank || !row.is_rejected())
            .collect();
        if self.order == RowOrder::Lexicographic {
            rows.sort_by(|(a, _), (b, _)| a.key().cmp(&b.key()));
        }

        for (target, row) in rows {
            let mut cells = Vec::with_capacity(environments.len() + 1);
            cells.push(target.display_name().into_owned());
            cells.extend(environments.names().map(|name| cell(row.get(name))));
            lines.push(cells.join("\t"));
        }

        lines.join("\n")
    }
}

fn header(environments: &EnvironmentTable) -> String {
    std::iter::once("")
        .chain(environments.names())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Decimal value for a success, empty for anything else.
#[must_use]
pub fn cell(result: Option<&QueryResult>) -> String {
    result
        .and_then(QueryResult::value)
        .map(|value| value.to_string())
        .unwrap_or_default()
}
