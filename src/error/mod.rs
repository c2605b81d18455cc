// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvSetupError (~24 bytes)
//!                  |
//!   +------+-------+-------+------+------+
//!   |      |       |       |      |      |
//!   v      v       v       v      v      v
//! Action  Git   Config  Process  Io    Other
//!  Box    Box    Box     Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Action  BadVariableName, EmptyValue, NewlineInValue, BadEchoValue, ...
//!   Git     NotARepository, Gix
//!   Config  InvalidValue
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit, Interrupted
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvSetupError`].
pub type SetupResult<T> = std::result::Result<T, EnvSetupError>;

/// Result type for action construction and lookup.
pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvSetupError {
    /// Invalid environment action.
    #[error("action error: {0}")]
    Action(#[from] Box<ActionError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl EnvSetupError {
    /// Exit code of the failed subprocess, if this error came from one.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Process(err) => match **err {
                ProcessError::NonZeroExit { code, .. } => Some(code),
                _ => None,
            },
            _ => None,
        }
    }
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvSetupError {
                fn from(err: $error) -> Self {
                    EnvSetupError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ActionError => Action,
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Action Errors ---

/// Errors raised when recording or resolving environment actions.
///
/// All of these are raised at the offending call, never deferred to
/// render or apply time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Variable name is not valid UTF-8.
    #[error("variable name {name:?} is not a valid UTF-8 string")]
    BadNameType { name: String },

    /// Variable name does not match `^[A-Za-z_][A-Za-z0-9_]*$`.
    #[error("bad variable name {name:?}")]
    BadVariableName { name: String },

    /// Value is not valid UTF-8.
    #[error("{name:?} value {value:?} is not a valid UTF-8 string")]
    BadValueType { name: String, value: String },

    /// Value is the empty string.
    #[error("{name:?} value is the empty string")]
    EmptyValue { name: String },

    /// Value contains a newline.
    #[error("{name:?} value {value:?} contains a newline")]
    NewlineInValue { name: String, value: String },

    /// Echo text is `on` or `off`, which batch files treat as a command.
    #[error("echo value {0:?} is reserved")]
    BadEchoValue(String),

    /// Action kind is not one of set, clear, append, prepend, echo.
    #[error("unexpected action {0:?}")]
    UnexpectedAction(String),

    /// List separator is empty or spans lines.
    #[error("path separator {pathsep:?} must be non-empty and single-line")]
    BadPathSeparator { pathsep: String },

    /// Variable has no value once all actions are applied.
    #[error("variable {name:?} is not set")]
    UnsetVariable { name: String },
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A directory exists where a checkout is expected, but it is not one.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
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
    NonZeroExit { command: String, code: i32 },

    /// Process was killed because the run was cancelled.
    #[error("process '{command}' was interrupted")]
    Interrupted { command: String },
}
