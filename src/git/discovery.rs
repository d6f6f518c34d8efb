// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Work-tree and submodule discovery.
//!
//! ```text
//! <root>/                  locate_worktree (gix, walks up from DIR)
//!   .gitmodules            load_submodules (git config --file)
//!     submodule.<name>.path     -> enumerates records, file order
//!     submodule.<name>.url
//!     submodule.<name>.branch   -> default_branch when unset
//!     submodule.<name>.ignore   -> IgnorePolicy::None when unset/unknown
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::backend::{GixBackend, ShellBackend};
use crate::error::{GitError, ProcessError, SubmoduleError, SubsyncResult};
use crate::submodule::{IgnorePolicy, SubmoduleRecord};

/// Submodule configuration store, relative to the work-tree root.
pub const GITMODULES: &str = ".gitmodules";

static PATH_KEY: LazyLock<Regex> = LazyLock::new(|| {
    // Section and key names are lowercased by git, the subsection keeps its case
    Regex::new(r"^submodule\.(.+)\.path$").expect("static regex is valid")
});

/// Resolve the `git` executable from `PATH`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if git is not installed.
pub fn require_git() -> SubsyncResult<PathBuf> {
    which::which("git").map_err(|_| {
        ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        }
        .into()
    })
}

/// Locate the root of the work tree containing `dir`.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if `dir` is not inside a git work tree.
pub fn locate_worktree(dir: &Path) -> SubsyncResult<PathBuf> {
    GixBackend::worktree_root(dir).map_err(|e| {
        debug!(dir = %dir.display(), error = %e, "work tree discovery failed");
        GitError::RepoNotFound {
            path: dir.display().to_string(),
        }
        .into()
    })
}

/// Read all submodule records from `<root>/.gitmodules`, in file order.
///
/// A missing `.gitmodules` yields no records.
///
/// # Errors
///
/// Returns `SubmoduleError::EmptyPath` for a record without a path, or a
/// `GitError` if git cannot read the file.
pub fn load_submodules(
    git: &ShellBackend,
    root: &Path,
    default_branch: &str,
) -> SubsyncResult<Vec<SubmoduleRecord>> {
    if !root.join(GITMODULES).is_file() {
        debug!(root = %root.display(), "no .gitmodules, nothing to sync");
        return Ok(Vec::new());
    }

    let mut records: Vec<SubmoduleRecord> = Vec::new();
    for (key, path) in git.config_get_regexp(root, GITMODULES, r"^submodule\..*\.path$")? {
        let Some(name) = PATH_KEY.captures(&key).and_then(|c| c.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if records.iter().any(|r| r.name == name) {
            continue;
        }
        let path = path.trim();
        if path.is_empty() {
            return Err(SubmoduleError::EmptyPath {
                name: name.to_string(),
            }
            .into());
        }

        let get = |field: &str| -> SubsyncResult<Option<String>> {
            Ok(git
                .config_get(root, GITMODULES, &format!("submodule.{name}.{field}"))?
                .filter(|value| !value.trim().is_empty()))
        };

        let ignore = match get("ignore")? {
            None => IgnorePolicy::default(),
            Some(raw) => IgnorePolicy::parse(&raw).unwrap_or_else(|| {
                warn!(submodule = name, value = %raw, "unrecognized ignore value, using 'none'");
                IgnorePolicy::default()
            }),
        };

        records.push(SubmoduleRecord {
            name: name.to_string(),
            path: path.to_string(),
            url: get("url")?,
            branch: get("branch")?.unwrap_or_else(|| default_branch.to_string()),
            ignore,
        });
    }

    debug!(count = records.len(), "submodules discovered");
    Ok(records)
}
