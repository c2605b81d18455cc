// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell init script rendering.
//!
//! ```text
//!            Posix                        Windows
//! header     -                            @echo off
//! set        N="v" / export N             set N=v
//! clear      unset N                      set N=
//! prepend    N="v<sep>$N" / export N      set N=v<sep>%N%
//! append     N="$N<sep>v" / export N      set N=%N%<sep>v
//! echo       if quiet unset: echo "v"     echo v
//! trailer    hash -r (bash/zsh)           -
//! doctor     pw --loglevel info|warn doctor (by PW_ENVSETUP_QUIET)
//! ```

use anyhow::Context;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use super::action::Action;
use super::model::EnvironmentModel;
use super::types::{Dialect, QUIET_VAR};
use crate::error::Result;

impl Action {
    /// Writes this action in `dialect`, joining list values with `pathsep`.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write<W: Write + ?Sized>(
        &self,
        out: &mut W,
        dialect: Dialect,
        pathsep: &str,
    ) -> io::Result<()> {
        match dialect {
            Dialect::Posix => self.write_posix(out, pathsep),
            Dialect::Windows => self.write_windows(out, pathsep),
        }
    }

    fn write_posix<W: Write + ?Sized>(&self, out: &mut W, pathsep: &str) -> io::Result<()> {
        match self {
            Self::Set { name, value } => write!(out, "{name}=\"{value}\"\nexport {name}\n"),
            Self::Clear { name } => writeln!(out, "unset {name}"),
            Self::Prepend { name, value } => {
                write!(out, "{name}=\"{value}{pathsep}${name}\"\nexport {name}\n")
            }
            Self::Append { name, value } => {
                write!(out, "{name}=\"${name}{pathsep}{value}\"\nexport {name}\n")
            }
            Self::Echo { value } => write!(
                out,
                "if [ -z \"${{{QUIET_VAR}:-}}\" ]; then\n  echo \"{value}\"\nfi\n"
            ),
        }
    }

    fn write_windows<W: Write + ?Sized>(&self, out: &mut W, pathsep: &str) -> io::Result<()> {
        // cmd passes the echo line through unparsed, so no quoting here.
        match self {
            Self::Set { name, value } => writeln!(out, "set {name}={value}"),
            Self::Clear { name } => writeln!(out, "set {name}="),
            Self::Prepend { name, value } => writeln!(out, "set {name}={value}{pathsep}%{name}%"),
            Self::Append { name, value } => writeln!(out, "set {name}=%{name}%{pathsep}{value}"),
            Self::Echo { value } => writeln!(out, "echo {value}"),
        }
    }
}

#[derive(Serialize)]
struct ModelDump<'a> {
    dialect: Dialect,
    pathsep: &'a str,
    actions: &'a [Action],
}

impl EnvironmentModel {
    /// Writes a shell init script for the model's dialect to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error from `out`.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let dialect = self.dialect();
        if dialect.is_windows() {
            writeln!(out, "@echo off")?;
        }

        for action in self.actions() {
            action.write(out, dialect, self.pathsep())?;
        }

        match dialect {
            Dialect::Posix => {
                out.write_all(
                    b"# This should detect bash and zsh, which have a hash \n\
                      # command that must be called to get it to forget past \n\
                      # commands. Without forgetting past commands the $PATH \n\
                      # changes we made may not be respected.\n\
                      if [ -n \"${BASH:-}\" -o -n \"${ZSH_VERSION:-}\" ] ; then\n\
                      \x20   hash -r\n\
                      fi\n",
                )?;
                write!(
                    out,
                    "if [ -z \"${{{QUIET_VAR}:-}}\" ]; then\n  \
                     pw --loglevel info doctor\n\
                     else\n  \
                     pw --loglevel warn doctor\n\
                     fi\n"
                )
            }
            Dialect::Windows => write!(
                out,
                "if \"%{QUIET_VAR}%\"==\"\" (\n  \
                 pw --loglevel info doctor\n\
                 ) else (\n  \
                 pw --loglevel warn doctor\n\
                 )\n"
            ),
        }
    }

    /// Renders the script to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Writes the script to `path`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or written,
    /// or if it cannot be moved over `path`.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        self.write(&mut file)
            .with_context(|| format!("failed to write {}", path.display()))?;
        file.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("failed to persist {}", path.display()))?;
        Ok(())
    }

    /// Serializes the dialect, separator and actions as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let dump = ModelDump {
            dialect: self.dialect(),
            pathsep: self.pathsep(),
            actions: self.actions(),
        };
        serde_json::to_string_pretty(&dump).context("failed to serialize environment model")
    }
}
