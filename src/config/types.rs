// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for subsync.
//!
//! ```text
//! Config: GlobalConfig, SyncConfig, GitConfig
//! ```

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log intended mutations instead of running them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Submodule synchronization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Remote fetched from and pushed to, in submodules and in the parent.
    pub remote: String,
    /// Branch used for records without `submodule.<name>.branch`.
    pub default_branch: String,
    /// Push automated commits after creating them.
    pub push: bool,
    /// `chrono` format string for `{timestamp}`.
    pub timestamp_format: String,
    /// Commit message for local changes inside a submodule.
    pub commit_message: String,
    /// Commit message for pointer updates in the parent repository.
    pub parent_commit_message: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            default_branch: "main".to_string(),
            push: true,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            commit_message: "chore(submodule): sync {name} ({timestamp})".to_string(),
            parent_commit_message: "chore: update submodule pointers in {repo} ({timestamp})"
                .to_string(),
        }
    }
}

impl SyncConfig {
    /// Check values that would only fail later, halfway through a run.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty remote, default branch,
    /// or commit message template, or an unparsable timestamp format.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                section: "sync".to_string(),
                key: "timestamp_format".to_string(),
                message: format!("invalid strftime format '{}'", self.timestamp_format),
            });
        }

        let required = [
            ("remote", &self.remote),
            ("default_branch", &self.default_branch),
            ("commit_message", &self.commit_message),
            ("parent_commit_message", &self.parent_commit_message),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "sync".to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Settings for the git executable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// `key=value` pairs passed as `git -c key=value` to every invocation.
    pub extra_config: Vec<String>,
}

impl GitConfig {
    /// Check that every `extra_config` entry has the `key=value` shape.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` naming the first malformed entry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        match self
            .extra_config
            .iter()
            .find(|entry| !matches!(entry.split_once('='), Some((key, _)) if !key.is_empty()))
        {
            Some(entry) => Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "extra_config".to_string(),
                message: format!("expected 'key=value', got '{entry}'"),
            }),
            None => Ok(()),
        }
    }
}
