// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (each owns its String)
//!   wait, or deadline --> kill + abort readers
//!   join readers, or deadline --> abort readers   (pipes held by a grandchild)
//!   --> ChildOutcome::Exited(ProcessOutput) | ChildOutcome::TimedOut
//! ```

use crate::error::Result;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::Instant;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// How a child run ended.
#[derive(Debug)]
pub(super) enum ChildOutcome {
    Exited(ProcessOutput),
    /// Deadline elapsed; the child has been reaped and the readers aborted.
    TimedOut,
}

/// Spawns a reader task for one stream if its flags need the bytes.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move { read_stream(stream, flags, &name, stream_name).await })
    })
}

/// Joins a reader task, yielding its collected text.
async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, capturing output and enforcing the deadline.
    ///
    /// The deadline covers both the wait and draining the pipes afterwards.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ChildOutcome> {
        let deadline = self.timeout_duration().map(|d| Instant::now() + d);
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");
        let aborts: Vec<AbortHandle> = [&stdout_handle, &stderr_handle]
            .into_iter()
            .flatten()
            .map(JoinHandle::abort_handle)
            .collect();

        let exit_status = if let Some(deadline) = deadline {
            tokio::select! {
                status = child.wait() => status?,
                () = tokio::time::sleep_until(deadline) => {
                    warn!(process = %name, timeout = ?self.timeout_duration(), "process timed out");
                    child.kill().await.with_context(|| format!("failed to kill process {name}"))?;
                    // A surviving grandchild may keep the pipes open
                    abort_all(&aborts);
                    return Ok(ChildOutcome::TimedOut);
                }
            }
        } else {
            child.wait().await?
        };

        let joined = async { (join_reader(stdout_handle).await, join_reader(stderr_handle).await) };
        let (stdout, stderr) = match deadline {
            Some(deadline) => {
                if let Ok(output) = tokio::time::timeout_at(deadline, joined).await {
                    output
                } else {
                    warn!(process = %name, "output still open after exit, giving up");
                    abort_all(&aborts);
                    return Ok(ChildOutcome::TimedOut);
                }
            }
            None => joined.await,
        };

        Ok(ChildOutcome::Exited(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        )))
    }
}

fn abort_all(handles: &[AbortHandle]) {
    for handle in handles {
        handle.abort();
    }
}

/// Reads a stream line by line, logging and/or keeping it per `flags`.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut output = String::new();
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %process_name, stream = %stream_name, line = %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                    output.push_str(&line);
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
    output
}
