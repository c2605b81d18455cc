// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! Console   File (--log-file)
//! stderr    non_blocking
//! EnvFilter EnvFilter
//! ANSI(tty) FmtSpan::CLOSE
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! -l / --file-log-level:  0=off 1=error 2=warn 3=info 4=debug 5=trace
//! ```
//!
//! Console output never goes to stdout; `envsetup script` and `get` write
//! their results there.

use anyhow::Context;
use bon::Builder;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Result;

/// Verbosity of one log destination.
///
/// - `Info` (3) shows every command that runs
/// - `Debug` (4) adds elided actions and working directories
/// - `Trace` (5) adds every variable a scope touches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Maps the numeric command-line level, `None` above 5.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Error),
            2 => Some(Self::Warn),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Where logs go and how much of them.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    /// Defaults to the console level.
    #[builder(setters(name = with_file_level))]
    file_level: Option<LogLevel>,
    #[builder(setters(name = with_log_file), into)]
    log_file: Option<PathBuf>,
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub fn file_level(&self) -> LogLevel {
        self.file_level.unwrap_or(self.console_level)
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or if a
/// global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use envsetup::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Warn)
///     .with_file_level(LogLevel::Debug)
///     .with_log_file("presubmit.log")
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("logging ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(EnvFilter::new(config.console_level().directive()));

    let (file_layer, file_guard) = match config.log_file() {
        Some(log_path) => {
            if let Some(parent) = log_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create log directory {}", parent.display())
                })?;
            }

            let file = std::fs::File::create(log_path)
                .with_context(|| format!("failed to create log file {}", log_path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(EnvFilter::new(config.file_level().directive()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
