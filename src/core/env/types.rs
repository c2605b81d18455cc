// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Dialect: Posix | Windows (host-detected default)
//! VarName: ^[A-Za-z_][A-Za-z0-9_]*$, UTF-8
//! VarValue: non-empty, no '\n', UTF-8
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//! ```

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex::Regex;

/// Path-list separator of the host (`;` on Windows, `:` elsewhere).
pub const HOST_PATHSEP: &str = if cfg!(windows) { ";" } else { ":" };

/// Variable that silences echo lines and the doctor banner when set.
pub const QUIET_VAR: &str = "PW_ENVSETUP_QUIET";

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("variable name pattern is a valid regex")
});

/// Target script syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// sh, bash, zsh and friends.
    Posix,
    /// cmd.exe batch files.
    Windows,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::host()
    }
}

impl Dialect {
    /// Returns the dialect native to the host.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether this is the Windows batch dialect.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// A validated environment variable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VarName(String);

impl VarName {
    /// Whether `name` is a valid identifier.
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        NAME_PATTERN.is_match(name)
    }

    pub(super) const fn new_unchecked(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated, non-empty, single-line variable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VarValue(String);

impl VarValue {
    pub(super) const fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An environment variable key, case-insensitive on Windows.
#[derive(Debug, Clone)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for EnvKey {}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if cfg!(windows) {
            self.0
                .bytes()
                .map(|b| b.to_ascii_lowercase())
                .cmp(other.0.bytes().map(|b| b.to_ascii_lowercase()))
        } else {
            self.0.cmp(&other.0)
        }
    }
}
