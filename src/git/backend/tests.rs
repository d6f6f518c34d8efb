// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitMutation, GitQuery, GixBackend, ShellBackend};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn shell() -> ShellBackend {
    ShellBackend::with_extra_config(vec![
        "user.name=Test".to_string(),
        "user.email=test@example.com".to_string(),
        "init.defaultBranch=main".to_string(),
        "commit.gpgsign=false".to_string(),
    ])
}

fn init_repo(git: &ShellBackend, path: &Path) {
    git.git_command(&["init", "--quiet"], path)
        .expect("failed to init repo");
}

/// Initialize a repository on `main` with one empty commit.
fn init_repo_with_commit(git: &ShellBackend, path: &Path) {
    init_repo(git, path);
    git.git_command(&["commit", "--allow-empty", "-q", "-m", "Initial commit"], path)
        .expect("failed to create initial commit");
}

#[test]
fn test_gix_worktree_root_from_subdirectory() {
    let temp = temp_dir();
    init_repo_with_commit(&shell(), temp.path());
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    let root = GixBackend::worktree_root(&nested).expect("root should be found");
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn test_gix_worktree_root_outside_repo() {
    let temp = temp_dir();
    assert!(GixBackend::worktree_root(temp.path()).is_err());
}

#[test]
fn test_current_branch_and_detached_head() {
    let temp = temp_dir();
    let git = shell();
    init_repo_with_commit(&git, temp.path());

    assert_eq!(git.current_branch(temp.path()).unwrap().as_deref(), Some("main"));

    git.git_command(&["checkout", "-q", "--detach"], temp.path())
        .unwrap();
    assert_eq!(git.current_branch(temp.path()).unwrap(), None);
}

#[test]
fn test_uncommitted_changes_include_untracked_files() {
    let temp = temp_dir();
    let git = shell();
    init_repo_with_commit(&git, temp.path());

    assert!(!git.has_uncommitted_changes(temp.path()).unwrap());

    std::fs::write(temp.path().join("notes.txt"), "untracked").unwrap();
    assert!(git.has_uncommitted_changes(temp.path()).unwrap());
}

#[test]
fn test_registered_submodule_is_a_gitlink() {
    let temp = temp_dir();
    let git = shell();
    init_repo_with_commit(&git, temp.path());

    std::fs::write(temp.path().join("README.md"), "# readme").unwrap();
    let head = git.git_command(&["rev-parse", "HEAD"], temp.path()).unwrap();
    let cacheinfo = format!("160000,{head},vendor/libfoo");
    git.git_command(&["update-index", "--add", "--cacheinfo", &cacheinfo], temp.path())
        .unwrap();
    git.git_command(&["add", "README.md"], temp.path()).unwrap();

    assert!(git.is_registered(temp.path(), "vendor/libfoo").unwrap());
    // Trailing slash is ignored
    assert!(git.is_registered(temp.path(), "vendor/libfoo/").unwrap());
    assert!(!git.is_registered(temp.path(), "README.md").unwrap());
    assert!(!git.is_registered(temp.path(), "vendor/other").unwrap());
}

#[test]
fn test_checkout_or_create_uses_remote_branch() {
    let temp = temp_dir();
    let git = shell();
    let upstream = temp.path().join("upstream");
    std::fs::create_dir_all(&upstream).unwrap();
    init_repo_with_commit(&git, &upstream);
    git.git_command(&["branch", "feature"], &upstream).unwrap();

    let clone = temp.path().join("clone");
    git.git_command(
        &[
            "clone",
            "-q",
            upstream.to_str().unwrap(),
            clone.to_str().unwrap(),
        ],
        temp.path(),
    )
    .unwrap();

    git.checkout_or_create(&clone, "feature", "origin").unwrap();
    assert_eq!(git.current_branch(&clone).unwrap().as_deref(), Some("feature"));

    // Neither a local nor a remote branch: the fallback fails too
    assert!(git.checkout_or_create(&clone, "missing", "origin").is_err());
    assert_eq!(git.current_branch(&clone).unwrap().as_deref(), Some("feature"));
}

#[test]
fn test_checkout_tracking_sets_upstream() {
    let temp = temp_dir();
    let git = shell();
    let upstream = temp.path().join("upstream");
    std::fs::create_dir_all(&upstream).unwrap();
    init_repo_with_commit(&git, &upstream);
    git.git_command(&["branch", "release"], &upstream).unwrap();

    let clone = temp.path().join("clone");
    git.git_command(
        &[
            "clone",
            "-q",
            upstream.to_str().unwrap(),
            clone.to_str().unwrap(),
        ],
        temp.path(),
    )
    .unwrap();

    git.checkout_tracking(&clone, "release", "origin").unwrap();
    let tracking = git
        .git_command(&["rev-parse", "--abbrev-ref", "release@{upstream}"], &clone)
        .unwrap();
    assert_eq!(tracking, "origin/release");
}

#[test]
fn test_stage_commit_clears_changes() {
    let temp = temp_dir();
    let git = shell();
    init_repo_with_commit(&git, temp.path());

    std::fs::write(temp.path().join("file.txt"), "content").unwrap();
    git.stage_all(temp.path()).unwrap();
    git.commit(temp.path(), "add file").unwrap();

    assert!(!git.has_uncommitted_changes(temp.path()).unwrap());
    let subject = git
        .git_command(&["log", "-1", "--format=%s"], temp.path())
        .unwrap();
    assert_eq!(subject, "add file");
}

#[test]
fn test_config_get_from_file() {
    let temp = temp_dir();
    let git = shell();
    init_repo(&git, temp.path());
    std::fs::write(
        temp.path().join(".gitmodules"),
        "[submodule \"libfoo\"]\n\tpath = vendor/libfoo\n\turl = https://example.org/libfoo.git\n",
    )
    .unwrap();

    assert_eq!(
        git.config_get(temp.path(), ".gitmodules", "submodule.libfoo.url")
            .unwrap()
            .as_deref(),
        Some("https://example.org/libfoo.git")
    );
    assert_eq!(
        git.config_get(temp.path(), ".gitmodules", "submodule.libfoo.branch")
            .unwrap(),
        None
    );
    assert_eq!(
        git.config_get_regexp(temp.path(), ".gitmodules", r"\.path$")
            .unwrap(),
        vec![(
            "submodule.libfoo.path".to_string(),
            "vendor/libfoo".to_string()
        )]
    );
    assert!(
        git.config_get_regexp(temp.path(), ".gitmodules", r"\.nothing$")
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_git_command_failure_carries_stderr() {
    let temp = temp_dir();
    let err = shell()
        .git_command(&["rev-parse", "HEAD"], temp.path())
        .unwrap_err();
    let message = err.to_string();
    assert!(
        message.starts_with("git error: git command failed: git rev-parse HEAD - "),
        "unexpected message: {message}"
    );
    assert!(message.contains("not a git repository"), "{message}");
}

#[test]
fn test_config_get_regexp_keeps_spaces_in_names() {
    let temp = temp_dir();
    let git = shell();
    init_repo(&git, temp.path());
    std::fs::write(
        temp.path().join(".gitmodules"),
        "[submodule \"my lib\"]\n\tpath = vendor/my lib\n[submodule \"other\"]\n\tpath = other\n",
    )
    .unwrap();

    let entries = git
        .config_get_regexp(temp.path(), ".gitmodules", r"\.path$")
        .unwrap();
    assert_eq!(
        entries,
        vec![
            (
                "submodule.my lib.path".to_string(),
                "vendor/my lib".to_string()
            ),
            ("submodule.other.path".to_string(), "other".to_string()),
        ]
    );
}
