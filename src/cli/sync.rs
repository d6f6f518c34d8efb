// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync and list command arguments.

use clap::Args;

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Keep automated commits local, same as `--set sync.push=false`.
    #[arg(long = "no-push")]
    pub no_push: bool,

    /// Submodules to sync, by name or path. All submodules when empty.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

impl SyncArgs {
    /// Converts command flags to `section.key=value` overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        if self.no_push {
            vec!["sync.push=false".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Print records as a JSON array.
    #[arg(long)]
    pub json: bool,
}
