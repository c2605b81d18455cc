// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envsetup.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envsetup.toml (cwd, optional)
//! 3. --config (repeatable)
//! 4. ENVSETUP_* env vars
//! 5. CLI flags (applied by each command)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVSETUP_SCRIPT__DIALECT=windows       → script.dialect = "windows"
//! ENVSETUP_PRESUBMIT__BRANCH=main        → presubmit.branch = "main"
//! ENVSETUP_PRESUBMIT__BAZEL_TARGETS="//a/... //b/..."
//!                                        → presubmit.bazel_targets = ["//a/...", "//b/..."]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

use loader::ConfigLoader;
pub use loader::ConfigSource;
pub use types::{PresubmitConfig, ScriptConfig};

/// Local config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "envsetup.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "ENVSETUP";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Script rendering defaults.
    pub script: ScriptConfig,
    /// Presubmit runner settings.
    pub presubmit: PresubmitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envsetup::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envsetup.toml")
    ///     .with_env_prefix("ENVSETUP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but make no sense.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        self.script.validate()?;
        self.presubmit.validate()?;
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("script.dialect".to_string(), self.script.dialect().to_string());
        options.insert("script.pathsep".to_string(), format!("{:?}", self.script.pathsep()));

        let p = &self.presubmit;
        options.insert("presubmit.buildtools_url".to_string(), p.buildtools_url.clone());
        options.insert("presubmit.branch".to_string(), p.branch.clone());
        options.insert(
            "presubmit.buildtools_dir".to_string(),
            p.buildtools_dir.display().to_string(),
        );
        options.insert(
            "presubmit.update_script".to_string(),
            p.update_script.display().to_string(),
        );
        options.insert(
            "presubmit.bazel_symlink_prefix".to_string(),
            p.bazel_symlink_prefix.clone(),
        );
        options.insert("presubmit.gn_out".to_string(), p.gn_out.display().to_string());
        options.insert(
            "presubmit.bazel_targets".to_string(),
            p.bazel_targets.join(" "),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
