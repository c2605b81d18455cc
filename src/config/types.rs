// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envsetup.
//!
//! # Config Structure
//!
//! ```text
//! Config
//!   [script]     dialect, pathsep           (both default to the host)
//!   [presubmit]  buildtools_url, branch, buildtools_dir, update_script,
//!                bazel_symlink_prefix, gn_out, bazel_targets
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::{Dialect, HOST_PATHSEP, validate_pathsep};
use crate::error::ConfigError;

/// Defaults for the `script` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Script dialect; the host's when unset.
    pub dialect: Option<Dialect>,
    /// Separator for list variables; the host's when unset.
    pub pathsep: Option<String>,
}

impl ScriptConfig {
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect.unwrap_or_default()
    }

    #[must_use]
    pub fn pathsep(&self) -> &str {
        self.pathsep.as_deref().unwrap_or(HOST_PATHSEP)
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        match &self.pathsep {
            Some(sep) => validate_pathsep(sep).map_err(|e| ConfigError::InvalidValue {
                section: "script".to_string(),
                key: "pathsep".to_string(),
                message: e.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Presubmit runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresubmitConfig {
    /// Repository holding the build tools.
    pub buildtools_url: String,
    /// Branch fetched from `buildtools_url`.
    pub branch: String,
    /// Checkout location, relative to the working directory.
    pub buildtools_dir: PathBuf,
    /// Script run after syncing, relative to `buildtools_dir`.
    pub update_script: PathBuf,
    /// Passed to bazel as `--symlink_prefix`.
    pub bazel_symlink_prefix: String,
    /// GN output directory.
    pub gn_out: PathBuf,
    /// Targets for `bazel build` and `bazel test`.
    pub bazel_targets: Vec<String>,
}

impl Default for PresubmitConfig {
    fn default() -> Self {
        Self {
            buildtools_url: "https://pigweed.googlesource.com/infra/buildtools".to_string(),
            branch: "master".to_string(),
            buildtools_dir: PathBuf::from(".presubmit/buildtools"),
            update_script: PathBuf::from("update.py"),
            bazel_symlink_prefix: ".presubmit/bazel-".to_string(),
            gn_out: PathBuf::from(".presubmit/gn"),
            bazel_targets: vec!["//...".to_string()],
        }
    }
}

impl PresubmitConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            section: "presubmit".to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.buildtools_url.trim().is_empty() {
            return Err(invalid("buildtools_url", "must not be empty"));
        }
        if self.branch.trim().is_empty() {
            return Err(invalid("branch", "must not be empty"));
        }
        if self.buildtools_dir.as_os_str().is_empty() {
            return Err(invalid("buildtools_dir", "must not be empty"));
        }
        if self.update_script.as_os_str().is_empty() {
            return Err(invalid("update_script", "must not be empty"));
        }
        if self.gn_out.as_os_str().is_empty() {
            return Err(invalid("gn_out", "must not be empty"));
        }
        if self.bazel_targets.is_empty() {
            return Err(invalid("bazel_targets", "at least one target is required"));
        }
        Ok(())
    }
}
