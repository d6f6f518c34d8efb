// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SubsyncError (~24 bytes)
//!                     |
//!   +------+------+---+---+-------+----+--------+
//!   |      |      |       |       |    |        |
//!   v      v      v       v       v    v        v
//! Bail    Git   Config Submodule Proc  Fs      Io
//!         Box    Box     Box     Box  Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git       Gix, RepoNotFound, CommandFailed, DetachedHead
//!   Config    MissingKey, InvalidValue, UnknownSubmodule
//!   Submodule MaterializationFailed, EmptyPath
//!   Process   ExecutableNotFound, SpawnFailed
//!   Fs        IoError
//!
//! All variants boxed => SubsyncError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SubsyncError`].
pub type SubsyncResult<T> = std::result::Result<T, SubsyncError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
/// Variants render their inner error and expose no `source`, so a
/// `{:#}` chain names each cause once.
#[derive(Debug, Error)]
pub enum SubsyncError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Submodule could not be processed.
    #[error("submodule error: {0}")]
    Submodule(Box<SubmoduleError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`SubsyncError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SubsyncError {
    SubsyncError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SubsyncError {
                fn from(err: $error) -> Self {
                    SubsyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    SubmoduleError => Submodule,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not inside a git working tree.
    #[error("not a git working tree: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// HEAD does not point at a branch, so there is nothing to push to.
    #[error("HEAD is detached in {path}, cannot determine the branch to push")]
    DetachedHead { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A submodule was requested on the command line but is not configured.
    #[error("no submodule named '{0}' in .gitmodules")]
    UnknownSubmodule(String),
}

// --- Submodule Errors ---

/// Per-submodule errors that abort the run.
#[derive(Debug, Error)]
pub enum SubmoduleError {
    /// The submodule directory still does not exist after add/update.
    #[error("submodule '{name}' could not be materialized at '{path}'")]
    MaterializationFailed { name: String, path: String },

    /// The record has an empty `path` value.
    #[error("submodule '{name}' has an empty path")]
    EmptyPath { name: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
