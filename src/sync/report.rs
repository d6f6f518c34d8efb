// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Outcome of a sync run.

use std::fmt;

/// What happened to one submodule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// `ignore = all`.
    Skipped,
    /// Synced, nothing to commit.
    Clean,
    /// Synced, local changes left alone (`ignore = dirty`).
    DirtyIgnored,
    /// Local changes committed, and pushed unless pushing is disabled.
    Committed { pushed: bool },
    /// Dry run: work was logged, not done.
    Planned,
}

/// What happened in the parent repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentOutcome {
    NothingToCommit,
    Committed {
        branch: Option<String>,
        pushed: bool,
    },
    Planned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub name: String,
    pub outcome: RecordOutcome,
}

/// Per-record outcomes in processing order, plus the finalization result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub records: Vec<RecordReport>,
    pub parent: ParentOutcome,
}

impl SyncReport {
    /// Number of records with the given outcome.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&RecordOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }

    /// Number of commits created, parent included.
    #[must_use]
    pub fn commits(&self) -> usize {
        let parent = usize::from(matches!(self.parent, ParentOutcome::Committed { .. }));
        self.count(|o| matches!(o, RecordOutcome::Committed { .. })) + parent
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} submodule(s): {} committed, {} clean, {} with uncommitted changes, {} skipped",
            self.records.len(),
            self.count(|o| matches!(o, RecordOutcome::Committed { .. })),
            self.count(|o| matches!(o, RecordOutcome::Clean)),
            self.count(|o| matches!(o, RecordOutcome::DirtyIgnored)),
            self.count(|o| matches!(o, RecordOutcome::Skipped)),
        )?;
        let planned = self.count(|o| matches!(o, RecordOutcome::Planned));
        if planned > 0 {
            write!(f, ", {planned} planned")?;
        }
        match &self.parent {
            ParentOutcome::NothingToCommit => write!(f, "; parent: nothing to commit"),
            ParentOutcome::Committed {
                branch,
                pushed: true,
            } => write!(
                f,
                "; parent: pointers committed and pushed to {}",
                branch.as_deref().unwrap_or("HEAD")
            ),
            ParentOutcome::Committed { pushed: false, .. } => {
                write!(f, "; parent: pointers committed (not pushed)")
            }
            ParentOutcome::Planned => write!(f, "; parent: commit planned"),
        }
    }
}
