// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          discovery.rs
//!   locate_worktree  load_submodules
//!           |              |
//!           v              v
//!      ,-------------------------,
//!      |    backend (traits)     |
//!      '--+-------------------+--'
//!         |                   |
//!         v                   v
//!    GitQuery            GitMutation
//!   (read state)        (write state)
//!         |                   |
//!         '---------+---------'
//!                   v
//!              ShellBackend
//!   .branch .registered .uncommitted
//!   .submodule add/update .config --file
//!   .fetch/checkout/pull .add/commit/push
//!
//!    GixBackend
//!    .worktree_root
//! ```
//!
//! **`GixBackend`**: pure Rust work-tree discovery.
//! **`ShellBackend`**: git CLI for every query and mutation.

pub mod backend;
pub mod discovery;
