// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment commands: `script`, `get` and `exec`.
//!
//! ```text
//! ACTION... --> EnvironmentModel (elides append/prepend on unset vars)
//!                 |
//!     +-----------+-------------+
//!     v           v             v
//!   script       get           exec
//!   write/json   resolved()    resolved() --> child env
//! ```
//!
//! `exec` never touches this process's environment; the child gets a
//! resolved copy.

use anyhow::Context;
use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::env::{ExecArgs, GetArgs, ScriptArgs};
use crate::config::Config;
use crate::core::env::{Action, Dialect, EnvironmentModel};
use crate::core::process::ProcessBuilder;
use crate::error::{ActionResult, Result};

/// Records `actions` into a fresh model resolved against the process
/// environment.
///
/// # Errors
///
/// Returns `ActionError::BadPathSeparator` if `pathsep` is empty or spans
/// lines.
pub fn build_model(
    actions: &[Action],
    pathsep: &str,
    dialect: Dialect,
) -> ActionResult<EnvironmentModel> {
    let mut model = EnvironmentModel::builder()
        .with_pathsep(pathsep)
        .with_dialect(dialect)
        .build()?;
    for action in actions {
        model.push(action.clone());
    }
    Ok(model)
}

fn pathsep<'a>(flag: Option<&'a str>, config: &'a Config) -> &'a str {
    flag.unwrap_or_else(|| config.script.pathsep())
}

/// Writes the init script (or its JSON dump) to `--output` or stdout.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_script_command(args: &ScriptArgs, config: &Config) -> Result<()> {
    let dialect = args.dialect.unwrap_or_else(|| config.script.dialect());
    let model = build_model(
        &args.actions,
        pathsep(args.pathsep.as_deref(), config),
        dialect,
    )?;
    debug!(%dialect, actions = model.actions().len(), "rendering");

    match (&args.output, args.json) {
        (Some(path), false) => model.write_to_file(path),
        (Some(path), true) => {
            let json = model.to_json()?;
            std::fs::write(path, json + "\n")
                .with_context(|| format!("failed to write {}", path.display()))
        }
        (None, json) => {
            let mut stdout = std::io::stdout().lock();
            let written = if json {
                writeln!(stdout, "{}", model.to_json()?)
            } else {
                model.write(&mut stdout)
            };
            written.context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}

/// Prints the value `args.name` has once the actions are applied.
///
/// # Errors
///
/// Returns `ActionError::UnsetVariable` if the variable ends up unset.
pub fn run_get_command(args: &GetArgs, config: &Config) -> Result<()> {
    let model = build_model(
        &args.actions,
        pathsep(args.pathsep.as_deref(), config),
        Dialect::host(),
    )?;
    let value = model.lookup(&args.name)?;
    println!("{value}");
    Ok(())
}

/// Runs the command with the actions applied to its environment.
///
/// # Errors
///
/// Returns a `ProcessError` if the program cannot be found or started, is
/// interrupted, or exits non-zero (carrying its exit code).
pub async fn run_exec_command(
    args: &ExecArgs,
    config: &Config,
    token: &CancellationToken,
) -> Result<()> {
    let Some((program, program_args)) = args.command.split_first() else {
        anyhow::bail!("no program given after `--`");
    };

    let model = build_model(
        &args.actions,
        pathsep(args.pathsep.as_deref(), config),
        Dialect::host(),
    )?;

    ProcessBuilder::new(program)
        .args(program_args)
        .env(model.resolved())
        .inherit_stdin()
        .run(token)
        .await?;
    Ok(())
}
