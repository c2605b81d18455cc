// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use envsetup::config::{Config, ConfigSource};
use envsetup::core::env::Dialect;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").expect("empty config is valid");
    assert_eq!(config, Config::default());
}

#[test]
fn config_parse_full() {
    let toml = r#"
[script]
dialect = "posix"
pathsep = ":"

[presubmit]
buildtools_url = "https://example.com/buildtools"
branch = "stable"
buildtools_dir = "third_party/buildtools"
update_script = "bootstrap.py"
bazel_symlink_prefix = "out/bazel-"
gn_out = "out/gn"
bazel_targets = ["//..."]
"#;
    let config = Config::parse(toml).expect("full config is valid");

    assert_eq!(config.script.dialect(), Dialect::Posix);
    insta::assert_json_snapshot!(config.presubmit, @r#"
    {
      "buildtools_url": "https://example.com/buildtools",
      "branch": "stable",
      "buildtools_dir": "third_party/buildtools",
      "update_script": "bootstrap.py",
      "bazel_symlink_prefix": "out/bazel-",
      "gn_out": "out/gn",
      "bazel_targets": [
        "//..."
      ]
    }
    "#);
}

#[test]
fn config_parse_type_mismatch() {
    let err = Config::parse("[presubmit]\nbazel_targets = \"//...\"")
        .expect_err("a string is not a target list");
    assert!(err.to_string().contains("bazel_targets"), "{err}");
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_later_files_win() {
    let temp = tempfile::tempdir().expect("tempdir");
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[presubmit]\nbranch = \"main\"\ngn_out = \"out/base\"\n")
        .expect("write base");
    std::fs::write(&local, "[presubmit]\ngn_out = \"out/local\"\n").expect("write local");

    let loader = Config::builder().add_toml_file(&base).add_toml_file(&local);
    assert_eq!(
        loader.sources(),
        [ConfigSource::File(base.clone()), ConfigSource::File(local.clone())]
    );
    let config = loader.build().expect("layered config is valid");

    assert_eq!(config.presubmit.branch, "main");
    assert_eq!(config.presubmit.gn_out, PathBuf::from("out/local"));
}

#[test]
fn config_required_file_missing() {
    assert!(
        Config::builder()
            .add_toml_file("/nonexistent/envsetup.toml")
            .build()
            .is_err()
    );
}

#[test]
fn config_optional_file_missing_is_fine() {
    let config = Config::builder()
        .add_toml_file_optional("/nonexistent/envsetup.toml")
        .build()
        .expect("optional file may be missing");
    assert_eq!(config, Config::default());
}
