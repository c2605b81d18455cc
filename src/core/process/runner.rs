// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run(token)
//!     |
//!     v
//! resolve_program()  -- not on PATH --> ExecutableNotFound
//!     |
//!     v
//! build_command()  args, cwd, env, stdio
//!     |
//!     v
//! spawn() ---------- io error --------> SpawnFailed
//!     |
//!     v
//! select! { wait, token.cancelled() --> kill, Interrupted }
//!     |
//!     v
//! validate exit code --> NonZeroExit
//! ```
//!
//! stdout and stderr are always inherited; stdin is null unless
//! `INHERIT_STDIN` is set.

use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, SetupResult};

impl ProcessBuilder {
    /// Spawns the process and waits for it, killing it if `token` is
    /// cancelled first.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::ExecutableNotFound`] if the program is not on `PATH`.
    /// - [`ProcessError::SpawnFailed`] if the OS refuses to start it.
    /// - [`ProcessError::Interrupted`] if `token` fires first.
    /// - [`ProcessError::NonZeroExit`] on a failing exit status. A child
    ///   killed by a signal reports code -1.
    pub async fn run(self, token: &CancellationToken) -> SetupResult<()> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if token.is_cancelled() {
            return Err(ProcessError::Interrupted { command: cmd_line }.into());
        }

        let program = self.resolve_program()?;

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        info!("$ {cmd_line}");

        let mut command = self.build_command(&program);
        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let status = tokio::select! {
            status = child.wait() => status.map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?,
            () = token.cancelled() => {
                warn!(process = %name, "interrupted, killing");
                if let Err(e) = child.kill().await {
                    debug!(process = %name, error = %e, "kill failed");
                }
                return Err(ProcessError::Interrupted { command: cmd_line }.into());
            }
        };

        let code = status.code().unwrap_or(-1);
        if code != 0 {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code,
            }
            .into());
        }

        trace!(process = %name, "completed");
        Ok(())
    }

    fn build_command(&self, program: &std::path::Path) -> Command {
        let mut command = Command::new(program);
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }
        command.envs(self.env_vars().iter().map(|(k, v)| (k, v)));

        if self.process_flags().contains(ProcessFlags::INHERIT_STDIN) {
            command.stdin(Stdio::inherit());
        } else {
            command.stdin(Stdio::null());
        }
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        command.kill_on_drop(true);
        command
    }
}
