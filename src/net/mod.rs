// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP access for the remote scan.
//!
//! ```text
//! fetch_text(url, timeout)
//!   global client (OnceLock, pooled, keep-alive)
//!   GET url ── deadline ──> Timeout
//!           ── !2xx ──────> HttpError { status }
//!           ── body ──────> String
//!
//! version.rs  VersionProbe: QueryExecutor
//!   {base}/{id without prefix}/version.json?t={unix secs} -> rev
//! ```

pub mod version;

#[cfg(test)]
mod tests;

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::trace;

use crate::error::NetworkError;

/// Global HTTP client, initialized once and reused for every request.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("verscan/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Fetches `url` and returns the body as text.
///
/// The status is checked before the body is read.
///
/// # Errors
///
/// Returns a `NetworkError` if:
/// - The deadline elapses (`Timeout`).
/// - The server answers with a non-success status (`HttpError`).
/// - The connection or body transfer fails (`Reqwest`).
pub async fn fetch_text(url: &str, timeout: Duration) -> Result<String, NetworkError> {
    let timed_out = |e: reqwest::Error| {
        if e.is_timeout() {
            NetworkError::Timeout {
                url: url.to_string(),
            }
        } else {
            NetworkError::Reqwest(e)
        }
    };

    trace!(%url, "GET");
    let response = global_client()
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(timed_out)?;

    if !response.status().is_success() {
        return Err(NetworkError::HttpError {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    response.text().await.map_err(timed_out)
}
