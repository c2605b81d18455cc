// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix.
//!
//! ```text
//! query.rs --> gix::open --> <path>/.git (no subprocess, no discovery)
//! ```
//!
//! Repositories are opened exactly at `path`. A checkout nested inside
//! another work tree is not confused with its parent.

use std::path::Path;

use crate::error::{GitError, GixError, SetupResult};

/// Fails with [`GitError::NotARepository`] unless `path` is a repository.
///
/// # Errors
///
/// Returns [`GitError::NotARepository`] if `path` is not the root of a git
/// repository, or [`GitError::Gix`] if it is one gix cannot open.
pub fn ensure_git_repo(path: &Path) -> SetupResult<()> {
    match gix::open(path) {
        Ok(_) => Ok(()),
        Err(gix::open::Error::NotARepository { .. }) => Err(GitError::NotARepository {
            path: path.display().to_string(),
        }
        .into()),
        Err(e) => Err(GitError::Gix(GixError::Open(Box::new(e))).into()),
    }
}
