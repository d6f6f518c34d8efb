// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for subsync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <repo>/subsync.toml (optional)
//! 3. --config FILE (repeatable)
//! 4. SUBSYNC_* env vars
//! 5. --set section.key=value
//! 6. CLI flags (--dry, --no-push)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SUBSYNC_GLOBAL__DRY=true                 → global.dry = true
//! SUBSYNC_SYNC__REMOTE=upstream            → sync.remote = "upstream"
//! SUBSYNC_GIT__EXTRA_CONFIG=a=1,b=2        → git.extra_config = ["a=1", "b=2"]
//! ```
//!
//! This file holds tool settings only; submodule records come from `.gitmodules`.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, SyncConfig};

/// File name looked up in the target directory.
pub const CONFIG_FILE_NAME: &str = "subsync.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SUBSYNC";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Synchronization behaviour.
    pub sync: SyncConfig,
    /// Git executable settings.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use subsync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("subsync.toml")
    ///     .with_env_prefix("SUBSYNC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that deserialize fine but cannot work at runtime.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in the `[sync]` or `[git]` sections.
    pub fn validate(&self) -> Result<()> {
        self.sync.validate()?;
        self.git.validate()?;
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_sync_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_sync_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("sync.remote".into(), self.sync.remote.clone());
        options.insert(
            "sync.default_branch".into(),
            self.sync.default_branch.clone(),
        );
        options.insert("sync.push".into(), self.sync.push.to_string());
        options.insert(
            "sync.timestamp_format".into(),
            self.sync.timestamp_format.clone(),
        );
        options.insert(
            "sync.commit_message".into(),
            self.sync.commit_message.clone(),
        );
        options.insert(
            "sync.parent_commit_message".into(),
            self.sync.parent_commit_message.clone(),
        );
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "git.extra_config".into(),
            self.git.extra_config.join(", "),
        );
    }
}
