// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//! --no-default-config ← Skip ./envsetup.toml
//!
//! Precedence: command flags > ENVSETUP_* > --config > envsetup.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times before the command; later files win.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        action = clap::ArgAction::Append
    )]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disables loading ./envsetup.toml, only uses --config.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,
}
