// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the environment commands.
//!
//! Actions are written `KIND:NAME=VALUE`:
//!
//! ```text
//! set:PW_ROOT=/src/pigweed     prepend:PATH=/opt/bin    append:PATH=/opt/bin
//! clear:PYTHONHOME             echo:Setting up environment
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::env::{Action, Dialect};

/// Arguments for the `script` command.
#[derive(Debug, Clone, Args)]
pub struct ScriptArgs {
    /// Shell dialect to write (defaults to [script] dialect, then the host's).
    #[arg(short = 'd', long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Separator joining list variables such as PATH.
    #[arg(long, value_name = "SEP")]
    pub pathsep: Option<String>,

    /// Write the script to FILE instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the recorded actions as JSON instead of a script.
    #[arg(long)]
    pub json: bool,

    /// Actions to record, in order.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Separator joining list variables such as PATH.
    #[arg(long, value_name = "SEP")]
    pub pathsep: Option<String>,

    /// Variable to print once the actions are applied.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Actions to apply, in order.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,
}

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Separator joining list variables such as PATH.
    #[arg(long, value_name = "SEP")]
    pub pathsep: Option<String>,

    /// Actions to apply, in order.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,

    /// Program and arguments, after `--`.
    #[arg(value_name = "COMMAND", required = true, last = true)]
    pub command: Vec<String>,
}
