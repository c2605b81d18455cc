// envsetup: Environment Setup Tooling
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envsetup.

use crate::config::{Config, ConfigSource};

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files, numbered in load order.
pub fn run_configs_command(sources: &[ConfigSource]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
    }
    for (index, source) in sources.iter().enumerate() {
        println!("{}. {source}", index + 1);
    }
}
