// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule records as declared in `.gitmodules`.
//!
//! ```text
//! [submodule "libfoo"]           SubmoduleRecord {
//!     path = vendor/libfoo   -->   name, path, url,
//!     url = https://...            branch (default_branch),
//!     branch = main                ignore (IgnorePolicy::None)
//!     ignore = dirty             }
//! ```

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// How much of the sync applies to a submodule (`submodule.<name>.ignore`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnorePolicy {
    /// Full sync, local changes are committed and pushed.
    #[default]
    None,
    /// Sync, but local changes are left uncommitted.
    Dirty,
    /// Skip the submodule entirely.
    All,
}

impl IgnorePolicy {
    /// Parse a `.gitmodules` value.
    ///
    /// Matching is exact, as in git itself. Anything outside
    /// `none | dirty | all` (git's `untracked` or `Dirty` included) returns
    /// `None`; callers fall back to the default policy.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "dirty" => Some(Self::Dirty),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dirty => "dirty",
            Self::All => "all",
        }
    }
}

impl fmt::Display for IgnorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `[submodule "<name>"]` section with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmoduleRecord {
    /// Section name, unique within `.gitmodules`.
    pub name: String,
    /// Path relative to the work-tree root, never empty.
    pub path: String,
    /// Remote URL; only needed when the submodule has to be registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Branch that is checked out, pulled and pushed.
    pub branch: String,
    pub ignore: IgnorePolicy,
}

impl SubmoduleRecord {
    /// Absolute location of the submodule's working tree.
    #[must_use]
    pub fn worktree(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }

    /// Whether `name` selects this record, by section name or by path.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim_end_matches('/');
        self.name == name || self.path.trim_end_matches('/') == name
    }
}

/// A submodule is missing when its directory is absent or empty.
///
/// Unreadable directories count as present; the sync step will then fail loudly.
#[must_use]
pub fn is_missing(dir: &Path) -> bool {
    if !dir.is_dir() {
        return true;
    }
    std::fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_none())
}

#[cfg(test)]
mod tests;
