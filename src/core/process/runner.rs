// verscan: game version scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()      args, cwd, env, stdio
//!   |
//!   v
//! spawn() ── NotFound ──> ExecutableNotFound
//!   |     ── other ─────> SpawnFailed
//!   v
//! run_child()          deadline ──> kill ──> Timeout
//!   |
//!   v
//! validate exit_code   != 0 ──> NonZeroExit
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use super::io::ChildOutcome;
use crate::error::{ProcessError, VerscanResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(super) fn command_line(&self) -> String {
        use std::fmt::Write as _;
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion or the deadline.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - The executable does not exist (`ExecutableNotFound`).
    /// - Spawning the child process fails for another reason (`SpawnFailed`).
    /// - The deadline elapses, including while draining output after exit;
    ///   the child is killed (`Timeout`).
    /// - Waiting on the child fails (`OutputError`).
    /// - The exit code is not zero (`NonZeroExit`, carrying captured stderr).
    pub async fn run(self) -> VerscanResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProcessError::ExecutableNotFound {
                    name: self.program().display().to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                }
            }
        })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let output = match self.run_child(&name, &mut child).await {
            Ok(ChildOutcome::Exited(output)) => output,
            Ok(ChildOutcome::TimedOut) => {
                let timeout_secs = self.timeout_duration().map_or(0, |d| d.as_secs());
                return Err(ProcessError::Timeout {
                    command: cmd_line,
                    timeout_secs,
                }
                .into());
            }
            Err(e) => {
                return Err(ProcessError::OutputError {
                    command: cmd_line,
                    message: e.to_string(),
                }
                .into());
            }
        };

        if !output.success() {
            if !output.stderr().is_empty() {
                warn!(
                    process = %name,
                    cwd = ?self.working_dir(),
                    code = output.exit_code(),
                    stderr = %output.stderr().trim(),
                    "process error output"
                );
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
                stderr: output.stderr().to_string(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.env_vars() {
            command.env(key, value);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }
}
