// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          script / get / exec / presubmit
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              | TOML + ENVSETUP_* layers  |
//!              '-------------+-------------'
//!                            |
//!                 +----------+----------+
//!                 v                     v
//!             presubmit                git
//!        sync / toolchain / build   gix query, git CLI
//!
//!   +-----------------------------------------+
//!   |  core   env (model, scripts, scopes),   |
//!   |         process (tokio, cancellable)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod presubmit;
