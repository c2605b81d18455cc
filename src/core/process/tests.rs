// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::core::env::Env;
use crate::error::{EnvSetupError, ProcessError};

fn process_error(err: EnvSetupError) -> ProcessError {
    match err {
        EnvSetupError::Process(err) => *err,
        other => panic!("expected a process error, got {other:?}"),
    }
}

/// `sh -c script` run inside `dir`; its output is read back from files there.
#[cfg(unix)]
fn sh(dir: &Path, script: &str) -> ProcessBuilder {
    ProcessBuilder::new("/bin/sh").args(["-c", script]).cwd(dir)
}

#[cfg(unix)]
fn read(dir: &Path, file: &str) -> String {
    std::fs::read_to_string(dir.join(file)).expect("child should write its output")
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_success() {
    let temp = tempfile::tempdir().expect("tempdir");
    sh(temp.path(), "echo hello > out")
        .run(&CancellationToken::new())
        .await
        .expect("echo should succeed");

    insta::assert_snapshot!(read(temp.path(), "out").trim(), @"hello");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_nonzero_exit_is_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let err = sh(temp.path(), "exit 42")
        .run(&CancellationToken::new())
        .await
        .expect_err("exit 42 should fail");

    assert_eq!(err.exit_code(), Some(42));
    assert!(matches!(
        process_error(err),
        ProcessError::NonZeroExit { code: 42, .. }
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_env_replaces_parent_env() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut env = Env::new();
    env.set("TEST_VAR", "test_value");

    sh(temp.path(), "echo \"$TEST_VAR:${HOME:-unset}\" > out")
        .env(env)
        .run(&CancellationToken::new())
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(read(temp.path(), "out").trim(), @"test_value:unset");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_env_var_overrides() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut env = Env::new();
    env.set("GREETING", "base");

    sh(temp.path(), "echo $GREETING > out")
        .env(env)
        .env_var("GREETING", "override")
        .run(&CancellationToken::new())
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(read(temp.path(), "out").trim(), @"override");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cwd() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(temp.path().join("marker.txt"), "x").expect("write marker");

    sh(temp.path(), "test -f marker.txt")
        .run(&CancellationToken::new())
        .await
        .expect("marker should be found in the working directory");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_stdin_is_null_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let builder = sh(temp.path(), "cat > out");
    assert!(!builder.process_flags().contains(ProcessFlags::INHERIT_STDIN));

    builder
        .run(&CancellationToken::new())
        .await
        .expect("cat should see EOF at once");

    assert_eq!(read(temp.path(), "out"), "");
}

#[test]
fn test_inherit_stdin_flag() {
    let builder = ProcessBuilder::new("cat").inherit_stdin();
    assert!(builder.process_flags().contains(ProcessFlags::INHERIT_STDIN));
}

#[tokio::test]
async fn test_process_executable_not_found() {
    let err = ProcessBuilder::new("envsetup-definitely-not-a-real-program")
        .run(&CancellationToken::new())
        .await
        .expect_err("missing program should fail");

    insta::assert_snapshot!(
        process_error(err).to_string(),
        @"executable not found: 'envsetup-definitely-not-a-real-program' (not in PATH)"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_resolves_against_child_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut env = Env::new();
    env.set("PATH", temp.path().to_string_lossy());

    let err = ProcessBuilder::new("sh")
        .env(env)
        .run(&CancellationToken::new())
        .await
        .expect_err("sh is not in the child's PATH");

    assert!(matches!(
        process_error(err),
        ProcessError::ExecutableNotFound { .. }
    ));
}

#[tokio::test]
async fn test_process_cancelled_before_spawn() {
    let token = CancellationToken::new();
    token.cancel();

    let err = ProcessBuilder::new("envsetup-never-spawned")
        .run(&token)
        .await
        .expect_err("cancelled token should interrupt");

    assert!(matches!(
        process_error(err),
        ProcessError::Interrupted { .. }
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_cancelled_while_running() {
    let token = CancellationToken::new();
    let canceller = token.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(100));
        canceller.cancel();
    });

    let started = std::time::Instant::now();
    let err = ProcessBuilder::new("sleep")
        .arg("30")
        .run(&token)
        .await
        .expect_err("sleep should be interrupted");

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(matches!(
        process_error(err),
        ProcessError::Interrupted { .. }
    ));
}

#[test]
fn test_command_line_quotes_spaced_args() {
    let builder = ProcessBuilder::new("gn").args(["gen", ".presubmit/gn", "--args=a b"]);
    insta::assert_snapshot!(builder.command_line(), @r#"gn gen .presubmit/gn "--args=a b""#);
}

#[test]
fn test_display_name() {
    assert_eq!(ProcessBuilder::new("/usr/bin/ninja").display_name(), "ninja");
    assert_eq!(
        ProcessBuilder::new("ninja").name("build").display_name(),
        "build"
    );
}
