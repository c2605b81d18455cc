// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   query.rs                 cmd.rs
//!   (gix, read-only)         (git CLI, writes)
//!      |                        |
//!      v                        v
//!   ensure_git_repo          fetch / reset_hard / clone
//!                            -> ProcessBuilder (not yet run)
//! ```
//!
//! **query** reads `.git/` directly, no subprocess.
//! **cmd** builds `git` invocations for the process runner, so callers can
//! plan, log and cancel them like any other step.

pub mod cmd;
pub mod query;
