// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("bazel")
//!   .args() .cwd() .env(model.resolved()) [.inherit_stdin()]
//!   .run(&token)
//!       --> tokio::process::Command (kill on drop, stdio inherited,
//!           stdin null unless INHERIT_STDIN)
//!       --> Ok(()) | NonZeroExit { code }
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;

pub use builder::{ProcessBuilder, ProcessFlags};
