// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule sync orchestration.
//!
//! ```text
//! for record in .gitmodules order:
//!   ignore = all ----------------------------------> Skipped
//!   missing? --> mkdir parent
//!            --> registered ? update --init --recursive
//!                           : add --force -b <branch> + update
//!   still missing ---------------------------------> abort run
//!   fetch --> checkout (or create tracking) --> pull
//!   status --porcelain
//!     clean ---------------------------------------> Clean
//!     dirty, ignore = dirty -----------------------> DirtyIgnored
//!     dirty, ignore = none --> add -A, commit, push -> Committed
//! parent: add -A --> status --> commit, push HEAD's branch
//! ```
//!
//! Records run strictly one after another. The first error stops the run;
//! commits and pushes already made stay in place.

pub mod context;
pub mod report;


use std::path::Path;
use tracing::{info, info_span, warn};

use crate::error::{ConfigError, FsError, GitError, SubmoduleError, SubsyncResult};
use crate::git::backend::{GitMutation, GitQuery};
use crate::submodule::{IgnorePolicy, SubmoduleRecord, is_missing};

pub use context::SyncContext;
pub use report::{ParentOutcome, RecordOutcome, RecordReport, SyncReport};

/// Drives one sync run over a list of records.
pub struct Orchestrator<'a, G> {
    ctx: &'a SyncContext,
    git: &'a G,
}

impl<'a, G> Orchestrator<'a, G>
where
    G: GitQuery + GitMutation,
{
    #[must_use]
    pub const fn new(ctx: &'a SyncContext, git: &'a G) -> Self {
        Self { ctx, git }
    }

    /// Sync every record in order, then commit pointer updates in the parent.
    ///
    /// # Errors
    ///
    /// Stops at the first failing record or git command. Returns
    /// `SubmoduleError::MaterializationFailed` if a submodule directory cannot be
    /// created, and `GitError::DetachedHead` if the parent has pointer updates to
    /// push but no branch checked out.
    pub fn run(&self, records: &[SubmoduleRecord]) -> SubsyncResult<SyncReport> {
        let mut reports = Vec::with_capacity(records.len());
        for record in records {
            let span = info_span!("submodule", name = %record.name, path = %record.path);
            let _entered = span.enter();
            let outcome = self.sync_record(record)?;
            reports.push(RecordReport {
                name: record.name.clone(),
                outcome,
            });
        }

        let parent = self.finalize()?;
        Ok(SyncReport {
            records: reports,
            parent,
        })
    }

    fn sync_record(&self, record: &SubmoduleRecord) -> SubsyncResult<RecordOutcome> {
        let auto_commit = match record.ignore {
            IgnorePolicy::All => {
                info!("ignore = all, skipping");
                return Ok(RecordOutcome::Skipped);
            }
            IgnorePolicy::Dirty => false,
            IgnorePolicy::None => true,
        };

        let worktree = record.worktree(self.ctx.root());
        if is_missing(&worktree) {
            if self.ctx.dry_run() {
                self.plan_materialize(record)?;
                return Ok(RecordOutcome::Planned);
            }
            self.materialize(record, &worktree)?;
        }

        if !worktree.is_dir() {
            return Err(SubmoduleError::MaterializationFailed {
                name: record.name.clone(),
                path: record.path.clone(),
            }
            .into());
        }

        self.pull_latest(record, &worktree)?;
        self.commit_local_changes(record, &worktree, auto_commit)
    }

    fn materialize(&self, record: &SubmoduleRecord, worktree: &Path) -> SubsyncResult<()> {
        let root = self.ctx.root();
        if let Some(parent) = worktree.parent() {
            std::fs::create_dir_all(parent).map_err(|source| FsError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        if self.git.is_registered(root, &record.path)? {
            info!("registered but missing on disk, initializing");
        } else {
            let url = record.url.as_deref().ok_or_else(|| ConfigError::MissingKey {
                section: format!("submodule \"{}\"", record.name),
                key: "url".to_string(),
            })?;
            info!(url, branch = %record.branch, "registering new submodule");
            self.git
                .add_submodule(root, &record.name, url, &record.branch, &record.path)?;
        }
        self.git.update_submodule(root, &record.path)
    }

    fn plan_materialize(&self, record: &SubmoduleRecord) -> SubsyncResult<()> {
        if self.git.is_registered(self.ctx.root(), &record.path)? {
            info!("dry run: would initialize registered submodule");
        } else {
            info!(url = ?record.url, branch = %record.branch, "dry run: would register new submodule");
        }
        Ok(())
    }

    fn pull_latest(&self, record: &SubmoduleRecord, worktree: &Path) -> SubsyncResult<()> {
        let remote = &self.ctx.settings().remote;
        let branch = &record.branch;
        if self.ctx.dry_run() {
            info!(remote, branch, "dry run: would fetch, checkout and pull");
            return Ok(());
        }

        info!(remote, branch, "pulling latest changes");
        self.git.fetch(worktree, remote)?;
        self.git.checkout_or_create(worktree, branch, remote)?;
        self.git.pull(worktree, remote, branch)
    }

    fn commit_local_changes(
        &self,
        record: &SubmoduleRecord,
        worktree: &Path,
        auto_commit: bool,
    ) -> SubsyncResult<RecordOutcome> {
        if !self.git.has_uncommitted_changes(worktree)? {
            info!("no local changes");
            return Ok(RecordOutcome::Clean);
        }
        if !auto_commit {
            warn!("local changes present, not committing (ignore = dirty)");
            return Ok(RecordOutcome::DirtyIgnored);
        }

        let message = self.ctx.commit_message(record);
        if self.ctx.dry_run() {
            info!(%message, "dry run: would commit and push local changes");
            return Ok(RecordOutcome::Planned);
        }

        info!(%message, "committing local changes");
        self.git.stage_all(worktree)?;
        self.git.commit(worktree, &message)?;
        let pushed = self.push(worktree, &record.branch)?;
        Ok(RecordOutcome::Committed { pushed })
    }

    fn finalize(&self) -> SubsyncResult<ParentOutcome> {
        let root = self.ctx.root();
        let repo = self.ctx.repo_name();

        if !self.ctx.dry_run() {
            self.git.stage_all(root)?;
        }
        if !self.git.has_uncommitted_changes(root)? {
            info!(repo, "nothing to commit");
            return Ok(ParentOutcome::NothingToCommit);
        }

        let branch = self.git.current_branch(root)?;
        if branch.is_none() && self.ctx.settings().push {
            return Err(GitError::DetachedHead {
                path: root.display().to_string(),
            }
            .into());
        }

        let message = self.ctx.parent_commit_message(branch.as_deref());
        if self.ctx.dry_run() {
            info!(repo, %message, "dry run: would commit submodule pointer updates");
            return Ok(ParentOutcome::Planned);
        }

        info!(repo, %message, "committing submodule pointer updates");
        self.git.commit(root, &message)?;
        let pushed = match branch.as_deref() {
            Some(name) => self.push(root, name)?,
            None => false,
        };
        Ok(ParentOutcome::Committed { branch, pushed })
    }

    /// Push `branch` unless pushing is disabled; returns whether it pushed.
    fn push(&self, repo_path: &Path, branch: &str) -> SubsyncResult<bool> {
        if !self.ctx.settings().push {
            info!(branch, "push disabled, keeping commit local");
            return Ok(false);
        }
        self.git.push(repo_path, &self.ctx.settings().remote, branch)?;
        Ok(true)
    }
}
