// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment mapping abstraction.
//!
//! ```text
//! EnvMap (get/set/remove/contains)
//!   ProcessEnv          --> std::env (process-wide)
//!   Env                 --> isolated snapshot
//!   BTreeMap / HashMap  --> plain maps
//!   &mut T              --> borrow any of the above
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A mutable string-keyed environment.
pub trait EnvMap {
    /// Returns the value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// Whether `key` is set.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// The environment of the running process.
///
/// Mutating it affects every thread and every child spawned afterwards.
/// Concurrent use from several threads is not supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvMap for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: callers serialize access to the process environment; see the
        // type-level docs.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        // SAFETY: Same as above
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}

impl EnvMap for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        BTreeMap::remove(self, key);
    }
}

impl<S: BuildHasher> EnvMap for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        HashMap::remove(self, key);
    }
}

impl<T: EnvMap + ?Sized> EnvMap for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}
