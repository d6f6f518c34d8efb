// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.sync.remote, "origin");
    assert_eq!(config.sync.default_branch, "main");
    assert!(config.sync.push);
    assert!(config.git.extra_config.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_sync_section() {
    let config = Config::parse(
        r#"
[sync]
remote = "upstream"
default_branch = "develop"
push = false
"#,
    )
    .unwrap();
    assert_eq!(config.sync.remote, "upstream");
    assert_eq!(config.sync.default_branch, "develop");
    assert!(!config.sync.push);
    // Untouched keys keep their defaults
    assert_eq!(config.sync.timestamp_format, "%Y-%m-%d %H:%M:%S");
}

#[test]
fn test_parse_git_extra_config() {
    let config = Config::parse(
        r#"
[git]
extra_config = ["protocol.file.allow=always", "user.name=Bot"]
"#,
    )
    .unwrap();
    assert_eq!(
        config.git.extra_config,
        vec!["protocol.file.allow=always", "user.name=Bot"]
    );
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse(
        r"
[sync]
remotes = 3
",
    );
    assert!(result.is_err(), "unknown key should be rejected");
}

#[test]
fn test_parse_rejects_empty_remote() {
    let err = Config::parse(
        r#"
[sync]
remote = "  "
"#,
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'remote' in section '[sync]': must not be empty"
    );
}

#[test]
fn test_parse_rejects_malformed_extra_config() {
    let err = Config::parse(
        r#"
[git]
extra_config = ["=oops"]
"#,
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'extra_config' in section '[git]': expected 'key=value', got '=oops'"
    );
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    let result = Config::parse(
        r"
[global]
output_log_level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_set_assignment_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[sync]\nremote = \"upstream\"\n")
        .set_assignment("sync.remote=mirror")
        .unwrap()
        .set_assignment("sync.push = false")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.sync.remote, "mirror");
    assert!(!config.sync.push);
}

#[test]
fn test_set_assignment_requires_section() {
    let err = ConfigLoader::new()
        .set_assignment("remote=mirror")
        .err()
        .unwrap();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for '--set' in section '[cli]': expected 'section.key=value', got 'remote=mirror'"
    );
    assert!(ConfigLoader::new().set_assignment("sync.remote").is_err());
}

#[test]
fn test_optional_file_missing_is_not_listed() {
    let temp = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(temp.path().join("subsync.toml"));
    assert!(loader.format_loaded_files().is_empty());
    let config = loader.build().unwrap();
    assert_eq!(config.sync.remote, "origin");
}

#[test]
fn test_required_file_missing_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::from_file(temp.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_format_options() {
    let config = Config::default();
    let lines: Vec<_> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    git.extra_config           =
    global.dry                 = false
    global.file_log_level      = 5
    global.log_file            =
    global.output_log_level    = 3
    sync.commit_message        = chore(submodule): sync {name} ({timestamp})
    sync.default_branch        = main
    sync.parent_commit_message = chore: update submodule pointers in {repo} ({timestamp})
    sync.push                  = true
    sync.remote                = origin
    sync.timestamp_format      = %Y-%m-%d %H:%M:%S
    ");
}

#[test]
fn test_parse_rejects_bad_timestamp_format() {
    let err = Config::parse(
        r#"
[sync]
timestamp_format = "%Y-%Q"
"#,
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'timestamp_format' in section '[sync]': invalid strftime format '%Y-%Q'"
    );
}
