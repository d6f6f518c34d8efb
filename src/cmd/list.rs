// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for subsync.

use std::path::Path;

use crate::cli::sync::ListArgs;
use crate::cmd::discover;
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::submodule::SubmoduleRecord;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if discovery fails or the records cannot be serialized.
pub fn run_list_command(args: &ListArgs, config: &Config, dir: &Path) -> Result<()> {
    let git = ShellBackend::with_extra_config(config.git.extra_config.clone());
    let (_root, records) = discover(dir, &git, &config.sync.default_branch)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No submodules found");
    } else {
        for line in format_table(&records) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One aligned row per record: name, path, branch, ignore, url.
#[must_use]
pub fn format_table(records: &[SubmoduleRecord]) -> Vec<String> {
    let name_width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let path_width = records.iter().map(|r| r.path.len()).max().unwrap_or(0);
    let branch_width = records.iter().map(|r| r.branch.len()).max().unwrap_or(0);

    records
        .iter()
        .map(|r| {
            format!(
                "{:<name_width$}  {:<path_width$}  {:<branch_width$}  {:<5}  {}",
                r.name,
                r.path,
                r.branch,
                r.ignore.as_str(),
                r.url.as_deref().unwrap_or("-"),
            )
        })
        .collect()
}
