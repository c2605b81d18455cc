// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment model: an append-only log of actions.
//!
//! ```text
//! EnvironmentModel::builder()
//!   .with_pathsep(":") .with_dialect(Posix) .with_base(env)
//!   .build()?                 (empty or multi-line pathsep rejected)
//!        |
//!   set / clear / append / prepend / echo / push
//!        |
//!   +----+-------------------+----------------------+
//!   v                        v                      v
//! write / render        scoped / export        resolved / get
//! (script.rs)           (scope.rs, restore)    (copy, no side effects)
//! ```

use bon::Builder;
use std::ffi::OsStr;
use tracing::debug;

use super::action::Action;
use super::container::Env;
use super::map::{EnvMap, ProcessEnv};
use super::scope::Scope;
use super::types::{Dialect, HOST_PATHSEP};
use crate::error::{ActionError, ActionResult};

/// Records environment changes so they can be applied in-process or written
/// out as a shell init script.
#[derive(Debug, Clone, Builder)]
#[builder(finish_fn(name = build_unchecked, vis = ""))]
pub struct EnvironmentModel {
    #[builder(skip)]
    actions: Vec<Action>,
    #[builder(setters(name = with_pathsep), into, default = String::from(HOST_PATHSEP))]
    pathsep: String,
    #[builder(setters(name = with_dialect), default = Dialect::host())]
    dialect: Dialect,
    /// Environment that effective values are resolved against.
    /// `None` reads the live process environment at query time.
    #[builder(setters(name = with_base))]
    base: Option<Env>,
}

impl<S: environment_model_builder::IsComplete> EnvironmentModelBuilder<S> {
    /// Builds the model.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::BadPathSeparator`] if the separator is empty or
    /// contains a newline.
    pub fn build(self) -> ActionResult<EnvironmentModel> {
        let model = self.build_unchecked();
        validate_pathsep(&model.pathsep)?;
        Ok(model)
    }
}

/// Checks that a list separator is non-empty and single-line.
///
/// # Errors
///
/// Returns [`ActionError::BadPathSeparator`] for such a separator.
pub fn validate_pathsep(pathsep: &str) -> ActionResult<()> {
    if pathsep.is_empty() || pathsep.contains(['\n', '\r']) {
        return Err(ActionError::BadPathSeparator {
            pathsep: pathsep.to_owned(),
        });
    }
    Ok(())
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            pathsep: String::from(HOST_PATHSEP),
            dialect: Dialect::host(),
            base: None,
        }
    }
}

impl EnvironmentModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded actions, in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn pathsep(&self) -> &str {
        &self.pathsep
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Sets `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn set(
        &mut self,
        name: impl AsRef<OsStr>,
        value: impl AsRef<OsStr>,
    ) -> ActionResult<&mut Self> {
        Ok(self.push(Action::set(name, value)?))
    }

    /// Unsets `name`.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name is invalid.
    pub fn clear(&mut self, name: impl AsRef<OsStr>) -> ActionResult<&mut Self> {
        Ok(self.push(Action::clear(name)?))
    }

    /// Adds `value` to the end of `name`. Rarely needed, see [`Self::prepend`].
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn append(
        &mut self,
        name: impl AsRef<OsStr>,
        value: impl AsRef<OsStr>,
    ) -> ActionResult<&mut Self> {
        Ok(self.push(Action::append(name, value)?))
    }

    /// Adds `value` to the beginning of `name`.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the name or value is invalid.
    pub fn prepend(
        &mut self,
        name: impl AsRef<OsStr>,
        value: impl AsRef<OsStr>,
    ) -> ActionResult<&mut Self> {
        Ok(self.push(Action::prepend(name, value)?))
    }

    /// Prints `value` when the script is sourced.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::BadEchoValue`] for `on`/`off`, or another
    /// [`ActionError`] if the text is not a valid value.
    pub fn echo(&mut self, value: impl AsRef<OsStr>) -> ActionResult<&mut Self> {
        Ok(self.push(Action::echo(value)?))
    }

    /// Records an already validated action.
    ///
    /// An append or prepend to a variable that is currently empty or unset is
    /// recorded as a plain set.
    pub fn push(&mut self, action: Action) -> &mut Self {
        let action = match action {
            Action::Append { name, value } | Action::Prepend { name, value }
                if self.get(name.as_str()).is_none_or(|v| v.is_empty()) =>
            {
                debug!(name = %name, "no current value, recording set");
                Action::Set { name, value }
            }
            other => other,
        };
        self.actions.push(action);
        self
    }

    /// The environment the model resolves against, before any action.
    fn base_env(&self) -> Env {
        self.base.clone().unwrap_or_else(Env::capture)
    }

    /// Applies every action to a copy of the base environment.
    ///
    /// Neither the process environment nor the base is modified.
    #[must_use]
    pub fn resolved(&self) -> Env {
        let mut env = self.base_env();
        for action in &self.actions {
            action.apply(&mut env, &self.pathsep);
        }
        env
    }

    /// Value of `name` once every action is applied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.resolved().get(name).map(str::to_owned)
    }

    /// Like [`Self::get`], but an unset variable is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::UnsetVariable`] if `name` has no value.
    pub fn lookup(&self, name: &str) -> ActionResult<String> {
        self.get(name).ok_or_else(|| ActionError::UnsetVariable {
            name: name.to_owned(),
        })
    }

    /// Applies every action to `env` and returns a guard that restores it.
    pub fn scoped<M: EnvMap>(&self, env: M) -> Scope<M> {
        Scope::enter(env, &self.actions, &self.pathsep)
    }

    /// Applies every action to the process environment until the guard drops.
    pub fn export(&self) -> Scope<ProcessEnv> {
        self.scoped(ProcessEnv)
    }

    /// Runs `f` with the actions applied to `env`, restoring afterwards even
    /// if `f` panics.
    pub fn with_scope<M, R>(&self, env: M, f: impl FnOnce(&mut M) -> R) -> R
    where
        M: EnvMap,
    {
        let mut scope = self.scoped(env);
        f(&mut scope)
    }
}
