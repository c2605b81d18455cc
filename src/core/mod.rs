// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and process management.
//!
//! ```text
//!            core
//!             |
//!       +-----+------+
//!       v            v
//!      env        process
//!       |            |
//!  EnvironmentModel  ProcessBuilder
//!  Action, Scope     ProcessFlags
//!  Env, EnvMap       (tokio, cancellable)
//! ```

pub mod env;
pub mod process;
