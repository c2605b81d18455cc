// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tokio_util::sync::CancellationToken;

use super::{Presubmit, run_steps};
use crate::config::PresubmitConfig;
use crate::core::env::{Env, HOST_PATHSEP};
use crate::core::process::ProcessBuilder;
use crate::error::{EnvSetupError, GitError};

fn command_lines(steps: &[ProcessBuilder]) -> Vec<String> {
    steps.iter().map(ProcessBuilder::command_line).collect()
}

#[cfg(unix)]
#[test]
fn test_sync_plan_clones_missing_checkout() {
    let presubmit = Presubmit::new(PresubmitConfig::default(), "/nonexistent/ws");
    let steps = presubmit.sync_steps().expect("plan should build");

    insta::assert_debug_snapshot!(command_lines(&steps), @r#"
    [
        "git clone https://pigweed.googlesource.com/infra/buildtools /nonexistent/ws/.presubmit/buildtools",
        "/nonexistent/ws/.presubmit/buildtools/update.py",
    ]
    "#);
}

#[test]
fn test_sync_plan_fetches_existing_checkout() {
    let root = tempfile::tempdir().expect("tempdir");
    let presubmit = Presubmit::new(PresubmitConfig::default(), root.path());
    let dir = presubmit.buildtools_dir();
    std::fs::create_dir_all(&dir).expect("create checkout dir");
    gix::init(&dir).expect("init checkout");

    let steps = presubmit.sync_steps().expect("plan should build");

    assert_eq!(steps.len(), 3);
    assert_eq!(
        steps[0].args_slice(),
        ["fetch", "https://pigweed.googlesource.com/infra/buildtools", "master"]
    );
    assert_eq!(steps[1].args_slice(), ["reset", "--hard", "FETCH_HEAD"]);
    assert_eq!(steps[0].working_dir(), Some(&dir));
    assert_eq!(steps[1].working_dir(), Some(&dir));
    assert_eq!(steps[2].program(), &dir.join("update.py"));
}

#[test]
fn test_sync_plan_rejects_non_repository() {
    let root = tempfile::tempdir().expect("tempdir");
    let presubmit = Presubmit::new(PresubmitConfig::default(), root.path());
    std::fs::create_dir_all(presubmit.buildtools_dir()).expect("create checkout dir");

    let err = presubmit.sync_steps().expect_err("plain dir should be rejected");
    assert!(matches!(
        err,
        EnvSetupError::Git(ref e) if matches!(**e, GitError::NotARepository { .. })
    ));
}

#[test]
fn test_toolchain_model_prepends_tools() {
    let presubmit = Presubmit::new(PresubmitConfig::default(), "ws");
    let dir = presubmit.buildtools_dir();

    let mut base = Env::new();
    base.set("PATH", "/usr/bin");
    let env = presubmit
        .toolchain_model(base.clone())
        .expect("model should build")
        .resolved();

    let expected = [
        dir.join("tools").display().to_string(),
        dir.join("tools").join("bin").display().to_string(),
        "/usr/bin".to_string(),
    ]
    .join(HOST_PATHSEP);
    assert_eq!(env.get("PATH"), Some(expected.as_str()));
    // The base is a copy.
    assert_eq!(base.get("PATH"), Some("/usr/bin"));
}

#[test]
fn test_toolchain_model_without_path() {
    let presubmit = Presubmit::new(PresubmitConfig::default(), "ws");
    let dir = presubmit.buildtools_dir();

    let model = presubmit
        .toolchain_model(Env::new())
        .expect("model should build");

    let expected = [
        dir.join("tools").display().to_string(),
        dir.join("tools").join("bin").display().to_string(),
    ]
    .join(HOST_PATHSEP);
    assert_eq!(model.get("PATH"), Some(expected));
}

#[test]
fn test_build_plan() {
    let presubmit = Presubmit::new(PresubmitConfig::default(), "ws");
    let mut env = Env::new();
    env.set("PATH", "/opt/tools");

    let steps = presubmit.build_steps(&env);

    insta::assert_debug_snapshot!(command_lines(&steps), @r#"
    [
        "bazel build //... --symlink_prefix .presubmit/bazel-",
        "bazel test //... --symlink_prefix .presubmit/bazel-",
        "gn gen .presubmit/gn",
        "ninja -C .presubmit/gn",
    ]
    "#);
    for step in &steps {
        assert_eq!(step.working_dir().map(|p| p.as_path()), Some(Path::new("ws")));
        assert_eq!(step.environment(), Some(&env));
    }
}

#[test]
fn test_build_plan_custom_targets() {
    let config = PresubmitConfig {
        bazel_targets: vec!["//pw_env/...".to_string(), "//pw_cli/...".to_string()],
        bazel_symlink_prefix: "out/bazel-".to_string(),
        ..PresubmitConfig::default()
    };
    let steps = Presubmit::new(config, "ws").build_steps(&Env::new());

    assert_eq!(
        steps[1].command_line(),
        "bazel test //pw_env/... //pw_cli/... --symlink_prefix out/bazel-"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_run_steps_stops_at_first_failure() {
    let root = tempfile::tempdir().expect("tempdir");
    let sh = |script: &str| {
        ProcessBuilder::new("/bin/sh")
            .args(["-c", script])
            .cwd(root.path())
    };
    let steps = vec![sh("touch first"), sh("exit 3"), sh("touch third")];

    let err = run_steps(steps, &CancellationToken::new())
        .await
        .expect_err("second step fails");

    assert_eq!(err.exit_code(), Some(3));
    assert!(root.path().join("first").exists());
    assert!(!root.path().join("third").exists());
}

#[tokio::test]
async fn test_run_steps_empty() {
    run_steps(Vec::new(), &CancellationToken::new())
        .await
        .expect("nothing to run");
}
