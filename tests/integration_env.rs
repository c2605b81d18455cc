// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the environment model.
//!
//! Records a realistic bootstrap sequence and checks every consumer of it:
//! script rendering, copy-mode queries, and scoped application.

use std::collections::{BTreeMap, HashMap};

use envsetup::core::env::{Dialect, Env, EnvMap, EnvironmentModel, ProcessEnv};
use serial_test::serial;

fn bootstrap_base() -> Env {
    [
        ("PATH", "/usr/bin:/bin"),
        ("HOME", "/home/dev"),
        ("PYTHONHOME", "/opt/python"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn bootstrap(dialect: Dialect, pathsep: &str) -> EnvironmentModel {
    let mut model = EnvironmentModel::builder()
        .with_dialect(dialect)
        .with_pathsep(pathsep)
        .with_base(bootstrap_base())
        .build()
        .expect("separator is valid");
    model
        .echo("Setting up environment")
        .and_then(|m| m.set("PW_ROOT", "/src/pigweed"))
        .and_then(|m| m.prepend("PATH", "/src/pigweed/.cipd/bin"))
        .and_then(|m| m.append("PYTHONPATH", "/src/pigweed/py"))
        .and_then(|m| m.clear("PYTHONHOME"))
        .expect("bootstrap actions are valid");
    model
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn env_bootstrap_posix_script() {
    let model = bootstrap(Dialect::Posix, ":");
    insta::assert_snapshot!(model.render(), @r#"
if [ -z "${PW_ENVSETUP_QUIET:-}" ]; then
  echo "Setting up environment"
fi
PW_ROOT="/src/pigweed"
export PW_ROOT
PATH="/src/pigweed/.cipd/bin:$PATH"
export PATH
PYTHONPATH="/src/pigweed/py"
export PYTHONPATH
unset PYTHONHOME
# This should detect bash and zsh, which have a hash 
# command that must be called to get it to forget past 
# commands. Without forgetting past commands the $PATH 
# changes we made may not be respected.
if [ -n "${BASH:-}" -o -n "${ZSH_VERSION:-}" ] ; then
    hash -r
fi
if [ -z "${PW_ENVSETUP_QUIET:-}" ]; then
  pw --loglevel info doctor
else
  pw --loglevel warn doctor
fi
"#);
}

#[test]
fn env_bootstrap_windows_script() {
    let model = bootstrap(Dialect::Windows, ";");
    insta::assert_snapshot!(model.render(), @r#"
@echo off
echo Setting up environment
set PW_ROOT=/src/pigweed
set PATH=/src/pigweed/.cipd/bin;%PATH%
set PYTHONPATH=/src/pigweed/py
set PYTHONHOME=
if "%PW_ENVSETUP_QUIET%"=="" (
  pw --loglevel info doctor
) else (
  pw --loglevel warn doctor
)
"#);
}

#[test]
fn env_render_both_dialects_leaves_actions_alone() {
    let model = bootstrap(Dialect::Posix, ":");
    let before = model.actions().to_vec();

    let mut windows = Vec::new();
    for action in model.actions() {
        action
            .write(&mut windows, Dialect::Windows, ";")
            .expect("writing to a Vec succeeds");
    }
    let _ = model.render();

    assert_eq!(model.actions(), before.as_slice());
    assert!(!windows.is_empty());
}

// =============================================================================
// Copy-mode queries
// =============================================================================

#[test]
fn env_resolved_copy() {
    let model = bootstrap(Dialect::Posix, ":");
    let env = model.resolved();

    assert_eq!(env.get("PW_ROOT"), Some("/src/pigweed"));
    assert_eq!(env.get("PATH"), Some("/src/pigweed/.cipd/bin:/usr/bin:/bin"));
    assert_eq!(env.get("PYTHONPATH"), Some("/src/pigweed/py"));
    assert_eq!(env.get("PYTHONHOME"), None);
    assert_eq!(env.get("HOME"), Some("/home/dev"));
}

#[test]
fn env_lookup_after_clear_fails() {
    let model = bootstrap(Dialect::Posix, ":");
    let err = model.lookup("PYTHONHOME").expect_err("cleared variable");
    insta::assert_snapshot!(err.to_string(), @r#"variable "PYTHONHOME" is not set"#);
}

// =============================================================================
// Scoped application
// =============================================================================

#[test]
fn env_scope_on_hashmap_restores() {
    let model = bootstrap(Dialect::Posix, ":");
    let mut env: HashMap<String, String> = bootstrap_base()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let before = env.clone();

    {
        let scope = model.scoped(&mut env);
        assert_eq!(scope.get("PW_ROOT").as_deref(), Some("/src/pigweed"));
        assert!(!scope.contains("PYTHONHOME"));
    }

    assert_eq!(env, before);
}

#[test]
fn env_with_scope_returns_value() {
    let model = bootstrap(Dialect::Posix, ":");
    let mut env: BTreeMap<String, String> = BTreeMap::new();
    env.insert("PATH".to_string(), "/usr/bin".to_string());

    let path = model.with_scope(&mut env, |scoped| scoped.get("PATH"));

    assert_eq!(path.as_deref(), Some("/src/pigweed/.cipd/bin:/usr/bin"));
    assert_eq!(env.get("PATH").map(String::as_str), Some("/usr/bin"));
    assert!(!env.contains_key("PW_ROOT"));
}

#[test]
#[serial]
fn env_export_to_process_restores() {
    let mut model = EnvironmentModel::builder().with_pathsep(":").build().unwrap();
    model
        .set("ENVSETUP_IT_EXPORTED", "yes")
        .expect("valid action");
    assert!(ProcessEnv.get("ENVSETUP_IT_EXPORTED").is_none());

    {
        let _scope = model.export();
        assert_eq!(
            std::env::var("ENVSETUP_IT_EXPORTED").ok().as_deref(),
            Some("yes")
        );
    }

    assert!(std::env::var_os("ENVSETUP_IT_EXPORTED").is_none());
}
