// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, SubmoduleError, SubsyncError, SubsyncResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "submodule.libfoo".to_string(),
        key: "url".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'url' in section '[submodule.libfoo]'"
    );
}

#[test]
fn test_materialization_error_display() {
    let err: SubsyncError = SubmoduleError::MaterializationFailed {
        name: "libfoo".to_string(),
        path: "vendor/libfoo".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"submodule error: submodule 'libfoo' could not be materialized at 'vendor/libfoo'"
    );
}

#[test]
fn test_git_error_boxes_into_top_level() {
    let err: SubsyncError = GitError::RepoNotFound {
        path: "/tmp/plain".to_string(),
    }
    .into();
    assert!(matches!(err, SubsyncError::Git(_)));
    insta::assert_snapshot!(err.to_string(), @"git error: not a git working tree: /tmp/plain");
}

#[test]
fn test_bail_out_message() {
    insta::assert_snapshot!(bail_out("stop").to_string(), @"fatal error: stop");
}

#[test]
fn test_subsync_error_size() {
    // Box<str> variant (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<SubsyncError>();
    assert!(size <= 24, "SubsyncError is {size} bytes, expected <= 24");
}

#[test]
fn test_subsync_result_size() {
    let size = std::mem::size_of::<SubsyncResult<()>>();
    assert!(size <= 24, "SubsyncResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_alternate_chain_names_cause_once() {
    let err: SubsyncError = GitError::CommandFailed {
        command: "git pull".to_string(),
        message: "not possible to fast-forward".to_string(),
    }
    .into();
    assert!(std::error::Error::source(&err).is_none());

    let err = anyhow::Error::from(err).context("sync failed in /work/site");
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"sync failed in /work/site: git error: git command failed: git pull - not possible to fast-forward"
    );
}
