// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command implementation for subsync.

use anyhow::Context;
use std::path::Path;
use tracing::info;

use crate::cli::sync::SyncArgs;
use crate::cmd::discover;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::git::backend::ShellBackend;
use crate::submodule::SubmoduleRecord;
use crate::sync::{Orchestrator, SyncContext, SyncReport};

/// Main handler for sync command.
///
/// # Errors
///
/// Returns an error if discovery fails, a requested name is unknown, or any
/// submodule or parent step fails.
pub fn run_sync_command(args: &SyncArgs, config: &Config, dir: &Path) -> Result<()> {
    let report = sync(args, config, dir)?;
    let prefix = if config.global.dry { "[DONE] (dry run) " } else { "[DONE] " };
    println!("{prefix}{report}");
    Ok(())
}

/// Run a sync with `git` from `config` and return the report.
///
/// # Errors
///
/// See [`run_sync_command`].
pub fn sync(args: &SyncArgs, config: &Config, dir: &Path) -> Result<SyncReport> {
    let git = ShellBackend::with_extra_config(config.git.extra_config.clone());
    let (root, records) = discover(dir, &git, &config.sync.default_branch)?;
    let selected = select(&records, &args.names)?;
    info!(
        root = %root.display(),
        count = selected.len(),
        dry = config.global.dry,
        "syncing submodules"
    );

    let ctx = SyncContext::new(root, config.sync.clone(), config.global.dry);
    Orchestrator::new(&ctx, &git)
        .run(&selected)
        .with_context(|| format!("sync failed in {}", ctx.root().display()))
}

/// Keep records named by `names` (by name or path), in `.gitmodules` order.
/// An empty `names` keeps everything.
///
/// # Errors
///
/// Returns `ConfigError::UnknownSubmodule` for the first name with no match.
pub fn select(records: &[SubmoduleRecord], names: &[String]) -> Result<Vec<SubmoduleRecord>> {
    if names.is_empty() {
        return Ok(records.to_vec());
    }
    if let Some(unknown) = names.iter().find(|n| !records.iter().any(|r| r.matches(n))) {
        return Err(ConfigError::UnknownSubmodule(unknown.clone()).into());
    }
    Ok(records
        .iter()
        .filter(|r| names.iter().any(|n| r.matches(n)))
        .cloned()
        .collect())
}
