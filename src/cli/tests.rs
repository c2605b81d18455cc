// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::core::env::{Action, Dialect};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envsetup", "version"]).expect("version parses");
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envsetup",
        "-l",
        "5",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "presubmit",
        "--log-file",
        "presubmit.log",
    ])
    .expect("global options parse");

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_file, Some(PathBuf::from("presubmit.log")));
    assert!(matches!(cli.command, Some(Command::Presubmit)));
}

#[test]
fn test_parse_config_after_command_rejected() {
    let err = Cli::try_parse_from(["envsetup", "-c", "a.toml", "options", "-c", "b.toml"])
        .expect_err("config files go before the command");
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envsetup", "-l", "6", "version"]).is_err());
}

#[test]
fn test_parse_script() {
    let cli = Cli::try_parse_from([
        "envsetup",
        "script",
        "--dialect",
        "windows",
        "--pathsep",
        ";",
        "-o",
        "setup.bat",
        "set:PW_ROOT=C:\\pigweed",
        "prepend:PATH=C:\\pigweed\\bin",
        "echo:ready",
    ])
    .expect("script parses");

    let Some(Command::Script(args)) = cli.command else {
        panic!("expected script command");
    };
    assert_eq!(args.dialect, Some(Dialect::Windows));
    assert_eq!(args.pathsep.as_deref(), Some(";"));
    assert_eq!(args.output, Some(PathBuf::from("setup.bat")));
    assert!(!args.json);
    insta::assert_snapshot!(
        args.actions.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"),
        @r"
    set:PW_ROOT=C:\pigweed
    prepend:PATH=C:\pigweed\bin
    echo:ready
    "
    );
}

#[test]
fn test_parse_script_rejects_bad_action() {
    let err = Cli::try_parse_from(["envsetup", "script", "set:1BAD=x"])
        .expect_err("bad name should be rejected");
    assert!(err.to_string().contains("bad variable name"), "{err}");

    let err = Cli::try_parse_from(["envsetup", "script", "echo:off"])
        .expect_err("reserved echo should be rejected");
    assert!(err.to_string().contains("reserved"), "{err}");
}

#[test]
fn test_parse_get() {
    let cli = Cli::try_parse_from(["envsetup", "get", "PATH", "append:PATH=/opt/bin"])
        .expect("get parses");

    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "PATH");
    assert_eq!(
        args.actions,
        [Action::append("PATH", "/opt/bin").expect("valid action")]
    );
}

#[test]
fn test_parse_exec() {
    let cli = Cli::try_parse_from([
        "envsetup",
        "exec",
        "set:GREETING=hi",
        "clear:PYTHONHOME",
        "--",
        "sh",
        "-c",
        "echo $GREETING",
    ])
    .expect("exec parses");

    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.actions.len(), 2);
    assert_eq!(args.command, ["sh", "-c", "echo $GREETING"]);
}

#[test]
fn test_parse_exec_requires_command() {
    assert!(Cli::try_parse_from(["envsetup", "exec", "set:A=b"]).is_err());
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["envsetup"]).expect("bare invocation parses");
    assert!(cli.command.is_none());
}
