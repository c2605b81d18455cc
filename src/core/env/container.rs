// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Isolated environment snapshot.
//!
//! # Architecture
//!
//! ```text
//! Env: BTreeMap<EnvKey, String>
//! Sources: Env::capture() (process), Env::from_map(), Env::new()
//! Used for: copy-mode resolution, child process environments
//! ```

use super::map::EnvMap;
use super::types::EnvKey;
use std::collections::BTreeMap;

/// A set of environment variables detached from the running process.
///
/// Keys compare case-insensitively on Windows and exactly elsewhere, matching
/// how the host looks variables up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect(),
        }
    }

    /// Snapshots the current process environment.
    ///
    /// Names or values that are not valid UTF-8 are converted lossily.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .map(|(k, v)| {
                    (
                        EnvKey::new(k.to_string_lossy().into_owned()),
                        v.to_string_lossy().into_owned(),
                    )
                })
                .collect(),
        }
    }

    /// Sets an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = EnvKey::new(key);
        // Keep the spelling already in use so Windows children see `Path`, not `PATH`.
        let key = self
            .vars
            .remove_entry(&key)
            .map_or(key, |(existing, _)| existing);
        self.vars.insert(key, value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvMap for Env {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).map(str::to_owned)
    }

    fn set(&mut self, key: &str, value: &str) {
        Self::set(self, key, value);
    }

    fn remove(&mut self, key: &str) {
        Self::remove(self, key);
    }
}

impl FromIterator<(String, String)> for Env {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect(),
        }
    }
}
