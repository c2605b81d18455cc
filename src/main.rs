// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Script | Get | Exec | Presubmit | Options | Configs | Version
//!                           |
//!            Ctrl-C --> CancellationToken (kills the running child)
//! ```

use anyhow::Context;
use std::process::ExitCode;

use envsetup::cli::global::GlobalOptions;
use envsetup::cli::{self, Command};
use envsetup::cmd::config::{run_configs_command, run_options_command};
use envsetup::cmd::env::{run_exec_command, run_get_command, run_script_command};
use envsetup::cmd::presubmit::run_presubmit_command;
use envsetup::config::loader::ConfigLoader;
use envsetup::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use envsetup::error::EnvSetupError;
use envsetup::logging::init_logging;
use envsetup::logging::{LogConfig, LogLevel};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let token = CancellationToken::new();
    spawn_ctrl_c_handler(token.clone());

    dispatch_command(&cli, &token).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    LogConfig::builder()
        .maybe_with_console_level(global.log_level.and_then(LogLevel::from_u8))
        .maybe_with_file_level(global.file_log_level.and_then(LogLevel::from_u8))
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

fn spawn_ctrl_c_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, stopping");
            token.cancel();
        }
    });
}

async fn dispatch_command(cli: &cli::Cli, token: &CancellationToken) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(loader.sources());
            Ok(())
        }
        Some(Command::Script(args)) => {
            load_config(&cli.global).and_then(|config| run_script_command(args, &config))
        }
        Some(Command::Get(args)) => {
            load_config(&cli.global).and_then(|config| run_get_command(args, &config))
        }
        Some(Command::Exec(args)) => match load_config(&cli.global) {
            Ok(config) => run_exec_command(args, &config, token).await,
            Err(e) => Err(e),
        },
        Some(Command::Presubmit) => match load_config(&cli.global) {
            Ok(config) => run_presubmit_command(&config, token).await,
            Err(e) => Err(e),
        },
        None => Err(anyhow::anyhow!(
            "no command specified, use --help for usage information"
        )),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

/// A failing child's exit code, or 1.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<EnvSetupError>()
        .and_then(EnvSetupError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .filter(|&code| code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(CONFIG_FILE_NAME);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> envsetup::error::Result<Config> {
    build_config_loader(global)
        .build()
        .context("failed to load config")
}
