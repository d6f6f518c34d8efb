// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for subsync using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! subsync [global options] <command>
//! sync [NAME...] [--no-push]
//! list [--json]
//! options
//! version
//! ```

pub mod global;
pub mod sync;


use crate::cli::global::GlobalOptions;
use crate::cli::sync::{ListArgs, SyncArgs};
use clap::{Parser, Subcommand};

/// Git submodule synchronizer
///
/// Keeps every submodule of a repository checked out on its configured
/// branch, up to date, and recorded in the parent.
#[derive(Debug, Parser)]
#[command(
    name = "subsync",
    author,
    version,
    about = "Git submodule synchronizer",
    long_about = "subsync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Brings every submodule listed in .gitmodules onto its configured\n\
                  branch, pulls the latest commits, commits local changes unless the\n\
                  submodule is ignored, and finally commits and pushes the updated\n\
                  submodule pointers in the parent repository.",
    after_help = "CONFIG FILES:\n\n\
                  subsync reads `subsync.toml` from the work-tree root if present.\n\
                  Additional files can be given with --config, later files override\n\
                  earlier ones. Environment variables such as SUBSYNC_SYNC__REMOTE\n\
                  override files, and --set section.key=value overrides everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values after layering.
    Options,

    /// Synchronizes submodules and commits the result in the parent.
    Sync(SyncArgs),

    /// Lists the submodules found in .gitmodules.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
