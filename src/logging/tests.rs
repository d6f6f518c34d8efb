// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use std::path::Path;

#[test]
fn test_log_level_bounds() {
    assert_eq!(LogLevel::new(0).ok(), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::new(6).ok(), Some(LogLevel::DUMP));
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(200), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_snapshot!(filters.join("\n"), @r"
    off
    error
    warn
    warn,subsync=info
    warn,subsync=debug
    warn,subsync=trace
    trace
    ");
}

#[test]
fn test_log_level_invalid_message() {
    let err = LogLevel::try_from(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("logs/sync.log".into())
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some(Path::new("logs/sync.log")));
}
