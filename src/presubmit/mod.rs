// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presubmit runner: sync build tools, then build and test.
//!
//! ```text
//! run(token)
//!   |
//!   v
//! sync_steps()        dir exists? -- no --> git clone <url> <dir>
//!   |                     | yes (must be a repo)
//!   |                     v
//!   |                 git fetch <url> <branch>; git reset --hard FETCH_HEAD
//!   |                 <dir>/update.py
//!   v
//! toolchain_model()   PATH = <dir>/tools : <dir>/tools/bin : $PATH
//!   |                 (resolved copy, process env untouched)
//!   v
//! build_steps(env)    bazel build, bazel test, gn gen, ninja
//! ```
//!
//! Steps run one at a time; the first failure ends the run.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::PresubmitConfig;
use crate::core::env::{Env, EnvironmentModel, HOST_PATHSEP};
use crate::core::process::ProcessBuilder;
use crate::error::SetupResult;
use crate::git::{cmd as git, query};

/// Revision checked out after fetching.
const FETCHED_REV: &str = "FETCH_HEAD";

/// Runs the presubmit checks for the workspace at `root`.
#[derive(Debug, Clone)]
pub struct Presubmit {
    config: PresubmitConfig,
    root: PathBuf,
}

impl Presubmit {
    #[must_use]
    pub fn new(config: PresubmitConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PresubmitConfig {
        &self.config
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the build tools checkout.
    #[must_use]
    pub fn buildtools_dir(&self) -> PathBuf {
        self.root.join(&self.config.buildtools_dir)
    }

    /// Steps that bring the build tools checkout up to date and run its
    /// update script.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`](crate::error::GitError) if the
    /// checkout directory exists but is not a git repository.
    pub fn sync_steps(&self) -> SetupResult<Vec<ProcessBuilder>> {
        let dir = self.buildtools_dir();
        let url = &self.config.buildtools_url;

        let mut steps = if dir.is_dir() {
            query::ensure_git_repo(&dir)?;
            debug!(dir = %dir.display(), "updating existing checkout");
            vec![
                git::fetch(&dir, url, &self.config.branch),
                git::reset_hard(&dir, FETCHED_REV),
            ]
        } else {
            debug!(dir = %dir.display(), "no checkout, cloning");
            vec![git::clone(url, &dir).cwd(&self.root)]
        };

        steps.push(
            ProcessBuilder::new(dir.join(&self.config.update_script))
                .cwd(&self.root)
                .name("update"),
        );
        Ok(steps)
    }

    /// `base` with the build tools put in front of `PATH`.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`](crate::error::ActionError) if a tool path
    /// is not a valid value.
    pub fn toolchain_model(&self, base: Env) -> SetupResult<EnvironmentModel> {
        let dir = self.buildtools_dir();
        let mut model = EnvironmentModel::builder()
            .with_pathsep(HOST_PATHSEP)
            .with_base(base)
            .build()?;
        // Prepends stack, so the last one ends up first.
        model
            .prepend("PATH", dir.join("tools").join("bin"))?
            .prepend("PATH", dir.join("tools"))?;
        Ok(model)
    }

    /// Build and test steps, run with `env` as their whole environment.
    #[must_use]
    pub fn build_steps(&self, env: &Env) -> Vec<ProcessBuilder> {
        let config = &self.config;
        let step = |program: &str| {
            ProcessBuilder::new(program)
                .cwd(&self.root)
                .env(env.clone())
        };

        let bazel = |verb: &str| {
            step("bazel")
                .arg(verb)
                .args(&config.bazel_targets)
                .args(["--symlink_prefix", config.bazel_symlink_prefix.as_str()])
                .name(format!("bazel {verb}"))
        };

        vec![
            bazel("build"),
            bazel("test"),
            step("gn").arg("gen").arg(&config.gn_out).name("gn gen"),
            step("ninja").arg("-C").arg(&config.gn_out).name("ninja"),
        ]
    }

    /// Runs every step, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first step's error; a failing subprocess surfaces as
    /// [`ProcessError::NonZeroExit`](crate::error::ProcessError) carrying its
    /// exit code.
    pub async fn run(&self, token: &CancellationToken) -> SetupResult<()> {
        info!(root = %self.root.display(), "presubmit");

        run_steps(self.sync_steps()?, token).await?;

        let env = self.toolchain_model(Env::capture())?.resolved();
        info!("PATH {}", env.get("PATH").unwrap_or_default());

        run_steps(self.build_steps(&env), token).await?;

        info!("presubmit passed");
        Ok(())
    }
}

/// Runs `steps` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the error of the first step that fails.
pub async fn run_steps(steps: Vec<ProcessBuilder>, token: &CancellationToken) -> SetupResult<()> {
    let total = steps.len();
    for (index, step) in steps.into_iter().enumerate() {
        debug!(step = index + 1, total, name = %step.display_name(), "step");
        step.run(token).await?;
    }
    Ok(())
}
