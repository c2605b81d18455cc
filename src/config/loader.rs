// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("envsetup.toml")   skipped when absent
//!   .add_toml_file(-c FILE) ...                must exist, later wins
//!   .with_env_prefix("ENVSETUP")               ENVSETUP_SECTION__KEY, applied last
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use config::{Environment, File, FileFormat};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// Keys whose environment value is a space-separated list.
const LIST_KEYS: &[&str] = &["presubmit.bazel_targets"];

/// A configuration layer, in the order it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file that must exist.
    File(PathBuf),
    /// A file that was present when it was added.
    Optional(PathBuf),
    /// TOML text passed in directly.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <string>"),
        }
    }
}

/// Collects TOML layers and an optional environment prefix, then builds a
/// validated [`Config`].
#[derive(Default)]
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML file that must exist when [`Self::build`] runs.
    #[must_use]
    pub fn add_toml_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    /// Adds a TOML file that is skipped if missing.
    #[must_use]
    pub fn add_toml_file_optional(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            self.sources.push(ConfigSource::Optional(path.to_path_buf()));
        }
        self
    }

    /// Adds TOML text as a layer.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `PREFIX_SECTION__KEY` variables, e.g. `ENVSETUP_PRESUBMIT__GN_OUT`,
    /// on top of every file.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Layers added so far. Optional files that were absent are left out.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, an unknown key is present, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let mut builder = self.builder;
        if let Some(prefix) = &self.env_prefix {
            let mut env = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .list_separator(" ")
                .try_parsing(true);
            for key in LIST_KEYS {
                env = env.with_list_parse_key(key);
            }
            builder = builder.add_source(env);
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
