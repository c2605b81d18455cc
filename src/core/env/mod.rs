// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentModel (ordered Vec<Action>, pathsep, dialect, base)
//!   record: set / clear / append / prepend / echo
//!   render: write / render / write_to_file / to_json
//!   apply:  scoped(EnvMap) / export() -> Scope (restore on drop)
//!   query:  resolved() / get() / lookup()  (isolated copy)
//! ```
//!
//! - **Fail fast**: invalid names and values are rejected when recorded
//! - **Case-insensitive on Windows**: `Env` keys follow host lookup rules
//! - **No residue**: a `Scope` restores every touched variable on drop

pub mod action;
pub mod container;
pub mod map;
pub mod model;
pub mod scope;
pub mod script;
pub mod types;


pub use action::Action;
pub use container::Env;
pub use map::{EnvMap, ProcessEnv};
pub use model::{EnvironmentModel, validate_pathsep};
pub use scope::Scope;
pub use types::{Dialect, HOST_PATHSEP, QUIET_VAR};
