// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validated environment actions.
//!
//! ```text
//! Action::{set, clear, prepend, append, echo}(..) --> validate --> Action
//! "kind:NAME=VALUE".parse()                        --> validate --> Action
//!
//! Checks, in order:
//!   name UTF-8   -> BadNameType
//!   value UTF-8  -> BadValueType
//!   value empty  -> EmptyValue
//!   value '\n'   -> NewlineInValue
//!   name pattern -> BadVariableName
//!   echo on/off  -> BadEchoValue (checked first for echo)
//! ```

use serde::Serialize;
use std::ffi::OsStr;
use std::str::FromStr;

use super::map::EnvMap;
use super::types::{VarName, VarValue};
use crate::error::{ActionError, ActionResult};

/// A single environment mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// `name=value`.
    Set { name: VarName, value: VarValue },
    /// Unset `name`.
    Clear { name: VarName },
    /// `value<sep>$name`.
    Prepend { name: VarName, value: VarValue },
    /// `$name<sep>value`.
    Append { name: VarName, value: VarValue },
    /// Print `value` when the script is sourced.
    Echo { value: VarValue },
}

impl Action {
    /// Creates a `Set` action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn set(name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> ActionResult<Self> {
        let (name, value) = validate(name.as_ref(), value.as_ref())?;
        Ok(Self::Set { name, value })
    }

    /// Creates a `Clear` action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name is invalid.
    pub fn clear(name: impl AsRef<OsStr>) -> ActionResult<Self> {
        Ok(Self::Clear {
            name: validate_name(name.as_ref())?,
        })
    }

    /// Creates a `Prepend` action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn prepend(name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> ActionResult<Self> {
        let (name, value) = validate(name.as_ref(), value.as_ref())?;
        Ok(Self::Prepend { name, value })
    }

    /// Creates an `Append` action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn append(name: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> ActionResult<Self> {
        let (name, value) = validate(name.as_ref(), value.as_ref())?;
        Ok(Self::Append { name, value })
    }

    /// Creates an `Echo` action.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::BadEchoValue`] for `on`/`off` in any case, or
    /// another [`ActionError`] if the text is not a valid value.
    pub fn echo(value: impl AsRef<OsStr>) -> ActionResult<Self> {
        let raw = value.as_ref();
        if let Some(text) = raw.to_str()
            && (text.eq_ignore_ascii_case("on") || text.eq_ignore_ascii_case("off"))
        {
            return Err(ActionError::BadEchoValue(text.to_owned()));
        }
        Ok(Self::Echo {
            value: validate_value("echo", raw)?,
        })
    }

    /// The variable this action touches, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Set { name, .. }
            | Self::Clear { name }
            | Self::Prepend { name, .. }
            | Self::Append { name, .. } => Some(name.as_str()),
            Self::Echo { .. } => None,
        }
    }

    /// The value carried by this action, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Set { value, .. }
            | Self::Prepend { value, .. }
            | Self::Append { value, .. }
            | Self::Echo { value } => Some(value.as_str()),
            Self::Clear { .. } => None,
        }
    }

    /// Short lowercase name of the action kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Set { .. } => "set",
            Self::Clear { .. } => "clear",
            Self::Prepend { .. } => "prepend",
            Self::Append { .. } => "append",
            Self::Echo { .. } => "echo",
        }
    }

    /// Applies this action to `env`, joining list values with `pathsep`.
    ///
    /// Prepending or appending to an empty or absent variable sets the plain
    /// value, so no leading or trailing separator is left behind.
    pub fn apply<M: EnvMap + ?Sized>(&self, env: &mut M, pathsep: &str) {
        match self {
            Self::Set { name, value } => env.set(name.as_str(), value.as_str()),
            Self::Clear { name } => env.remove(name.as_str()),
            Self::Prepend { name, value } => {
                let joined = match env.get(name.as_str()) {
                    Some(current) if !current.is_empty() => {
                        format!("{value}{pathsep}{current}")
                    }
                    _ => value.to_string(),
                };
                env.set(name.as_str(), &joined);
            }
            Self::Append { name, value } => {
                let joined = match env.get(name.as_str()) {
                    Some(current) if !current.is_empty() => {
                        format!("{current}{pathsep}{value}")
                    }
                    _ => value.to_string(),
                };
                env.set(name.as_str(), &joined);
            }
            Self::Echo { .. } => {}
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Set { name, value }
            | Self::Prepend { name, value }
            | Self::Append { name, value } => write!(f, "{}:{name}={value}", self.kind()),
            Self::Clear { name } => write!(f, "clear:{name}"),
            Self::Echo { value } => write!(f, "echo:{value}"),
        }
    }
}

/// Parses `set:NAME=VALUE`, `append:NAME=VALUE`, `prepend:NAME=VALUE`,
/// `clear:NAME` and `echo:TEXT`.
impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| ActionError::UnexpectedAction(s.to_owned()))?;
        let assignment = || rest.split_once('=').unwrap_or((rest, ""));

        match kind.to_ascii_lowercase().as_str() {
            "set" => {
                let (name, value) = assignment();
                Self::set(name, value)
            }
            "prepend" => {
                let (name, value) = assignment();
                Self::prepend(name, value)
            }
            "append" => {
                let (name, value) = assignment();
                Self::append(name, value)
            }
            "clear" => Self::clear(rest),
            "echo" => Self::echo(rest),
            _ => Err(ActionError::UnexpectedAction(kind.to_owned())),
        }
    }
}

fn validate(name: &OsStr, value: &OsStr) -> ActionResult<(VarName, VarValue)> {
    let name_str = name.to_str().ok_or_else(|| ActionError::BadNameType {
        name: name.to_string_lossy().into_owned(),
    })?;
    let value = validate_value(name_str, value)?;
    let name = validate_name(name)?;
    Ok((name, value))
}

fn validate_name(name: &OsStr) -> ActionResult<VarName> {
    let name = name.to_str().ok_or_else(|| ActionError::BadNameType {
        name: name.to_string_lossy().into_owned(),
    })?;
    if !VarName::is_valid(name) {
        return Err(ActionError::BadVariableName {
            name: name.to_owned(),
        });
    }
    Ok(VarName::new_unchecked(name.to_owned()))
}

fn validate_value(name: &str, value: &OsStr) -> ActionResult<VarValue> {
    let value = value.to_str().ok_or_else(|| ActionError::BadValueType {
        name: name.to_owned(),
        value: value.to_string_lossy().into_owned(),
    })?;
    if value.is_empty() {
        return Err(ActionError::EmptyValue {
            name: name.to_owned(),
        });
    }
    if value.contains('\n') {
        return Err(ActionError::NewlineInValue {
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }
    Ok(VarValue::new_unchecked(value.to_owned()))
}
