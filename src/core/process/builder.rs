// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new
//!  • arg/args/cwd/env/env_var/flag/inherit_stdin/name
//!  • command_line()/resolve_program()
//!
//! ProcessFlags: INHERIT_STDIN
//! ```

use bitflags::bitflags;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::env::Env;
use crate::error::ProcessError;

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Hand this process's stdin to the child instead of a null device
        const INHERIT_STDIN = 0x01;
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    /// Full environment for the child; `None` inherits the parent's.
    env: Option<Env>,
    /// Set on top of whichever environment the child gets.
    extra_env: Vec<(String, String)>,
    flags: ProcessFlags,
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// A bare name is looked up on the child's `PATH` when the process runs.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: None,
            extra_env: Vec::new(),
            flags: ProcessFlags::empty(),
            name: None,
        }
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Replaces the child's whole environment with `env`.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Sets a single variable for the child.
    #[must_use]
    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_env.push((key.into(), value.into()));
        self
    }

    /// Adds a process flag.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Lets the child read this process's stdin.
    #[must_use]
    pub fn inherit_stdin(self) -> Self {
        self.flag(ProcessFlags::INHERIT_STDIN)
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    #[must_use]
    pub const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    /// Variables set on top of the child's environment, in order.
    #[must_use]
    pub fn env_vars(&self) -> &[(String, String)] {
        &self.extra_env
    }

    #[must_use]
    pub const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    /// Returns the display name for this process.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program.file_stem().map_or_else(
                || "process".to_string(),
                |s| s.to_string_lossy().into_owned(),
            )
        })
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program.display());
        for arg in &self.args {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Resolves the program against the `PATH` the child will see.
    ///
    /// Paths with more than one component are used as given.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::ExecutableNotFound`] if a bare name is not on
    /// that `PATH`.
    pub fn resolve_program(&self) -> Result<PathBuf, ProcessError> {
        if self.program.components().count() > 1 {
            return Ok(self.program.clone());
        }

        let path = self
            .extra_env
            .iter()
            .rev()
            .find(|(k, _)| k == "PATH")
            .map(|(_, v)| v.clone())
            .or_else(|| self.env.as_ref().map(|e| e.get("PATH").unwrap_or_default().to_owned()))
            .or_else(|| std::env::var("PATH").ok());
        let cwd = match &self.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        which::which_in(&self.program, path, cwd).map_err(|_| ProcessError::ExecutableNotFound {
            name: self.program.display().to_string(),
        })
    }
}
