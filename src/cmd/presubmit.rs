// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presubmit command implementation.

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::Result;
use crate::presubmit::Presubmit;

/// Runs the presubmit checks in the current directory.
///
/// # Errors
///
/// Returns the first failing step's error; see [`Presubmit::run`].
pub async fn run_presubmit_command(config: &Config, token: &CancellationToken) -> Result<()> {
    let root = std::env::current_dir().context("failed to read the current directory")?;
    Presubmit::new(config.presubmit.clone(), root)
        .run(token)
        .await?;
    Ok(())
}
