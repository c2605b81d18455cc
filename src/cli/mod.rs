// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envsetup using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envsetup [global options] <command>
//! script [--dialect D] [--pathsep SEP] [-o FILE] [--json] ACTION...
//! get [--pathsep SEP] NAME ACTION...
//! exec [--pathsep SEP] ACTION... -- PROGRAM [ARGS...]
//! presubmit
//! options
//! configs
//! version
//! ```

pub mod env;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::env::{ExecArgs, GetArgs, ScriptArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Environment setup tooling.
///
/// Records environment changes, writes them as shell init scripts, and runs
/// the presubmit checks.
#[derive(Debug, Parser)]
#[command(
    name = "envsetup",
    author,
    version,
    about = "Environment setup recorder and presubmit runner",
    long_about = "envsetup Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Records environment changes (set, clear, append, prepend,\n\
                  echo) and writes them as a POSIX or Windows batch init\n\
                  script, applies them to a single command, or runs the\n\
                  presubmit checks. See `envsetup <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  envsetup reads `envsetup.toml` from the current directory if\n\
                  it exists, then every file given with --config, then\n\
                  ENVSETUP_<SECTION>__<KEY> environment variables. Use\n\
                  --no-default-config to skip `envsetup.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files in load order.
    Configs,

    /// Writes a shell init script for the given actions.
    Script(ScriptArgs),

    /// Prints a variable's value after applying the given actions.
    Get(GetArgs),

    /// Runs a program with the given actions applied to its environment.
    Exec(ExecArgs),

    /// Syncs the build tools and runs the bazel and gn builds.
    Presubmit,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
