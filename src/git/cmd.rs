// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command builders.
//!
//! ```text
//! cmd.rs --> ProcessBuilder("git" ...) --> runner (logged, cancellable)
//! ```
//!
//! Every command sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so
//! an unattended run fails instead of waiting on a credential prompt.

use std::path::Path;

use crate::core::process::ProcessBuilder;

/// A `git` invocation with the non-interactive environment set.
#[must_use]
pub fn git_command(cwd: Option<&Path>) -> ProcessBuilder {
    let builder = ProcessBuilder::new("git")
        .env_var("GCM_INTERACTIVE", "never")
        .env_var("GIT_TERMINAL_PROMPT", "0");
    match cwd {
        Some(dir) => builder.cwd(dir),
        None => builder,
    }
}

/// `git fetch <url> <branch>` inside `repo`.
#[must_use]
pub fn fetch(repo: &Path, url: &str, branch: &str) -> ProcessBuilder {
    git_command(Some(repo))
        .args(["fetch", url, branch])
        .name("git fetch")
}

/// `git reset --hard <rev>` inside `repo`.
#[must_use]
pub fn reset_hard(repo: &Path, rev: &str) -> ProcessBuilder {
    git_command(Some(repo))
        .args(["reset", "--hard", rev])
        .name("git reset")
}

/// `git clone <url> <dest>`, checking out the remote's default branch.
#[must_use]
pub fn clone(url: &str, dest: &Path) -> ProcessBuilder {
    git_command(None)
        .arg("clone")
        .arg(url)
        .arg(dest)
        .name("git clone")
}
