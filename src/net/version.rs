// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Published build revision lookup.
//!
//! ```text
//! Games-S5G-H5-99963 ──strip "Games-"──> S5G-H5-99963
//!   GET {base}/S5G-H5-99963/version.json?t=1760000000
//!   {"rev": 812, ...} ──> Value(812)
//! ```

use bon::Builder;
use serde_json::Value;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

use super::fetch_text;
use crate::config::types::Environment;
use crate::error::NetworkError;
use crate::report::{QueryExecutor, QueryResult, Target};

/// Fetches `version.json` for each (game, environment) pair.
#[derive(Debug, Clone, Builder)]
pub struct VersionProbe {
    #[builder(setters(name = with_strip_prefix), into, default = "Games-".to_string())]
    strip_prefix: String,
    #[builder(setters(name = with_timeout), default = Duration::from_secs(10))]
    timeout: Duration,
}

/// URL path segment for a game id: the id with one leading `prefix` removed.
#[must_use]
pub fn game_path<'a>(id: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return id;
    }
    id.strip_prefix(prefix).unwrap_or(id)
}

/// Cache-busting version document URL.
#[must_use]
pub fn version_url(base_url: &str, path: &str, timestamp: u64) -> String {
    format!(
        "{}/{path}/version.json?t={timestamp}",
        base_url.trim_end_matches('/')
    )
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Reads the non-negative integer `rev` field of a version document.
///
/// # Errors
///
/// Returns `MalformedBody` for invalid JSON and `MissingField` when `rev`
/// is absent, null, negative, fractional or not a number.
pub fn extract_rev(body: &str, url: &str) -> Result<u64, NetworkError> {
    let document: Value = serde_json::from_str(body).map_err(|e| NetworkError::MalformedBody {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    document
        .get("rev")
        .and_then(Value::as_u64)
        .ok_or_else(|| NetworkError::MissingField {
            url: url.to_string(),
            field: "rev".to_string(),
        })
}

impl VersionProbe {
    /// Fetches and parses one version document.
    ///
    /// # Errors
    ///
    /// Returns the `NetworkError` of the request or of [`extract_rev`].
    pub async fn fetch_rev(&self, id: &str, base_url: &str) -> Result<u64, NetworkError> {
        let url = version_url(base_url, game_path(id, &self.strip_prefix), unix_seconds());
        let body = fetch_text(&url, self.timeout).await?;
        extract_rev(&body, &url)
    }
}

impl QueryExecutor for VersionProbe {
    async fn query(&self, target: &Target, environment: &Environment) -> QueryResult {
        let result = self.fetch_rev(&target.key(), environment.base_url()).await;
        if let Err(error) = &result {
            debug!(id = %target, env = %environment.name, %error, "version lookup failed");
        }
        QueryResult::from(result)
    }
}
