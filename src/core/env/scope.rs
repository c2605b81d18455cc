// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped apply with guaranteed restore.
//!
//! ```text
//! Scope::enter(env, actions)
//!   Entered  capture prior value of every touched name
//!   Applied  run actions in order
//!   Yielded  Deref/DerefMut to the mapping
//!   Restored Drop: re-set or remove each touched name
//! ```
//!
//! Restore runs on every exit path, including unwinding from a panic.

use std::ops::{Deref, DerefMut};
use tracing::trace;

use super::action::Action;
use super::map::EnvMap;

/// Guard over an environment with a model's actions applied.
///
/// Dropping the guard puts every variable the actions touched back to the
/// value it had on entry, or removes it if it was unset.
#[must_use = "the environment is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct Scope<M: EnvMap> {
    env: M,
    saved: Vec<(String, Option<String>)>,
}

impl<M: EnvMap> Scope<M> {
    pub(super) fn enter(env: M, actions: &[Action], pathsep: &str) -> Self {
        let mut saved: Vec<(String, Option<String>)> = Vec::new();
        for name in actions.iter().filter_map(Action::name) {
            if !saved.iter().any(|(seen, _)| seen == name) {
                saved.push((name.to_owned(), env.get(name)));
            }
        }
        trace!(touched = saved.len(), actions = actions.len(), "entering env scope");

        // Build the guard before applying so a panic mid-apply still restores.
        let mut scope = Self { env, saved };
        for action in actions {
            action.apply(&mut scope.env, pathsep);
        }
        scope
    }

    /// Names captured on entry, in first-touched order.
    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.saved.iter().map(|(name, _)| name.as_str())
    }

    fn restore(&mut self) {
        for (name, prior) in self.saved.drain(..).rev() {
            match prior {
                Some(value) => self.env.set(&name, &value),
                None => self.env.remove(&name),
            }
        }
        trace!("env scope restored");
    }
}

impl<M: EnvMap> Deref for Scope<M> {
    type Target = M;

    fn deref(&self) -> &Self::Target {
        &self.env
    }
}

impl<M: EnvMap> DerefMut for Scope<M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.env
    }
}

impl<M: EnvMap> Drop for Scope<M> {
    fn drop(&mut self) {
        self.restore();
    }
}
