// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   env (script, get, exec), presubmit, config (options, configs)
//! ```

pub mod config;
pub mod env;
pub mod presubmit;
