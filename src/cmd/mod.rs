// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   sync, list, config (options)
//! ```

pub mod config;
pub mod list;
pub mod sync;


use std::path::{Path, PathBuf};

use crate::error::SubsyncResult;
use crate::git::backend::ShellBackend;
use crate::git::discovery::{load_submodules, locate_worktree, require_git};
use crate::submodule::SubmoduleRecord;

/// Check for git, find the work-tree root above `dir` and read its records.
///
/// # Errors
///
/// Returns a `ProcessError` if git is missing, a `GitError` if `dir` is not in a
/// work tree, or the first error from reading `.gitmodules`.
pub fn discover(
    dir: &Path,
    git: &ShellBackend,
    default_branch: &str,
) -> SubsyncResult<(PathBuf, Vec<SubmoduleRecord>)> {
    require_git()?;
    let root = locate_worktree(dir)?;
    let records = load_submodules(git, &root, default_branch)?;
    Ok((root, records))
}
