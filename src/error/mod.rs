// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VerscanError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Process  Net   Cfg  Discovery Report  Io
//!   Box    Box   Box     Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit, Timeout,
//!             OutputError, UnexpectedOutput
//!   Network   Reqwest, HttpError, Timeout, MalformedBody, MissingField
//!   Config    InvalidValue
//!   Discovery PathMissing, NotADirectory, NotARepository
//!   Report    WriteFailed
//! ```
//!
//! Per-pair query failures never travel as `VerscanError`; they are folded
//! into [`crate::report::FailureKind`] by the executors.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VerscanError`].
pub type VerscanResult<T> = std::result::Result<T, VerscanError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum VerscanError {
    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Target validation failed.
    #[error("discovery error: {0}")]
    Discovery(#[from] Box<DiscoveryError>),

    /// Report could not be produced.
    #[error("report error: {0}")]
    Report(#[from] Box<ReportError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VerscanError {
                fn from(err: $error) -> Self {
                    VerscanError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    NetworkError => Network,
    ConfigError => Config,
    DiscoveryError => Discovery,
    ReportError => Report,
    std::io::Error => Io,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Failed while waiting on or reading from the process.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },

    /// Process succeeded but printed something other than what was asked for.
    #[error("unexpected output from process '{command}': {output:?}")]
    UnexpectedOutput { command: String, output: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Request deadline elapsed.
    #[error("connection timeout: {url}")]
    Timeout { url: String },

    /// Response body is not the expected JSON document.
    #[error("malformed response from {url}: {message}")]
    MalformedBody { url: String, message: String },

    /// Expected field is absent, null, or of the wrong type.
    #[error("field '{field}' missing or invalid in response from {url}")]
    MissingField { url: String, field: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Discovery Errors ---

/// A repository target that cannot be queried at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    #[error("path does not exist: {path}")]
    PathMissing { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    #[error("not a git repository: {path}")]
    NotARepository { path: String },
}

// --- Report Errors ---

/// Report sink errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file could not be written or moved into place.
    #[error("failed to write report '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
