// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{IgnorePolicy, SubmoduleRecord, is_missing};
use std::path::Path;

fn record(name: &str, path: &str) -> SubmoduleRecord {
    SubmoduleRecord {
        name: name.to_string(),
        path: path.to_string(),
        url: Some("https://example.org/libfoo.git".to_string()),
        branch: "main".to_string(),
        ignore: IgnorePolicy::default(),
    }
}

#[test]
fn test_ignore_policy_parse() {
    assert_eq!(IgnorePolicy::parse("none"), Some(IgnorePolicy::None));
    assert_eq!(IgnorePolicy::parse("dirty"), Some(IgnorePolicy::Dirty));
    assert_eq!(IgnorePolicy::parse("all"), Some(IgnorePolicy::All));
}

#[test]
fn test_ignore_policy_is_case_sensitive() {
    assert_eq!(IgnorePolicy::parse("Dirty"), None);
    assert_eq!(IgnorePolicy::parse("ALL"), None);
    assert_eq!(IgnorePolicy::parse(" all"), None);
}

#[test]
fn test_ignore_policy_rejects_unknown_values() {
    assert_eq!(IgnorePolicy::parse("untracked"), None);
    assert_eq!(IgnorePolicy::parse(""), None);
    assert_eq!(IgnorePolicy::parse("nothing"), None);
}

#[test]
fn test_ignore_policy_default_is_none() {
    assert_eq!(IgnorePolicy::default(), IgnorePolicy::None);
    assert_eq!(IgnorePolicy::Dirty.to_string(), "dirty");
}

#[test]
fn test_record_matches_name_or_path() {
    let rec = record("libfoo", "vendor/libfoo");
    assert!(rec.matches("libfoo"));
    assert!(rec.matches("vendor/libfoo"));
    assert!(rec.matches("vendor/libfoo/"));
    assert!(!rec.matches("vendor"));
}

#[test]
fn test_record_worktree_joins_root() {
    let rec = record("libfoo", "vendor/libfoo");
    assert_eq!(
        rec.worktree(Path::new("/repo")),
        Path::new("/repo/vendor/libfoo")
    );
}

#[test]
fn test_record_json_shape() {
    let mut rec = record("libfoo", "vendor/libfoo");
    rec.ignore = IgnorePolicy::Dirty;
    insta::assert_snapshot!(
        serde_json::to_string(&rec).unwrap(),
        @r#"{"name":"libfoo","path":"vendor/libfoo","url":"https://example.org/libfoo.git","branch":"main","ignore":"dirty"}"#
    );
}

#[test]
fn test_is_missing() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("vendor/libfoo");
    assert!(is_missing(&dir), "absent directory is missing");

    std::fs::create_dir_all(&dir).unwrap();
    assert!(is_missing(&dir), "empty directory is missing");

    std::fs::write(dir.join(".git"), "gitdir: ../../.git/modules/libfoo\n").unwrap();
    assert!(!is_missing(&dir), "populated directory is present");
}

#[test]
fn test_is_missing_for_plain_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("libfoo");
    std::fs::write(&file, "not a directory").unwrap();
    assert!(is_missing(&file));
}
