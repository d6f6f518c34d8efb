// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run context, built once at startup.

use std::path::{Path, PathBuf};

use crate::config::types::SyncConfig;
use crate::submodule::SubmoduleRecord;

/// Everything the orchestrator needs from the environment.
#[derive(Debug, Clone)]
pub struct SyncContext {
    root: PathBuf,
    repo_name: String,
    settings: SyncConfig,
    dry_run: bool,
}

impl SyncContext {
    /// Context for the work tree at `root`; the repository name is its last component.
    #[must_use]
    pub fn new(root: PathBuf, settings: SyncConfig, dry_run: bool) -> Self {
        let repo_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("repository")
            .to_string();
        Self {
            root,
            repo_name,
            settings,
            dry_run,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    #[must_use]
    pub const fn settings(&self) -> &SyncConfig {
        &self.settings
    }

    #[must_use]
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Commit message for local changes in `record`.
    #[must_use]
    pub fn commit_message(&self, record: &SubmoduleRecord) -> String {
        let timestamp = self.timestamp();
        render(
            &self.settings.commit_message,
            &[
                ("name", record.name.as_str()),
                ("path", record.path.as_str()),
                ("branch", record.branch.as_str()),
                ("repo", self.repo_name.as_str()),
                ("timestamp", timestamp.as_str()),
            ],
        )
    }

    /// Commit message for the parent's pointer updates on `branch`.
    #[must_use]
    pub fn parent_commit_message(&self, branch: Option<&str>) -> String {
        let timestamp = self.timestamp();
        render(
            &self.settings.parent_commit_message,
            &[
                ("repo", self.repo_name.as_str()),
                ("branch", branch.unwrap_or("HEAD")),
                ("timestamp", timestamp.as_str()),
            ],
        )
    }

    fn timestamp(&self) -> String {
        use std::fmt::Write;

        let now = chrono::Local::now();
        let mut out = String::new();
        // Formats are validated on load; fall back to RFC 3339 for hand-built settings.
        if write!(out, "{}", now.format(&self.settings.timestamp_format)).is_err() {
            out = now.to_rfc3339();
        }
        out
    }
}

/// Replace `{key}` placeholders; unknown placeholders are left as written.
pub(crate) fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}
