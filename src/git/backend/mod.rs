// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> ShellBackend (git CLI)
//! GitMutation (write) --> ShellBackend (git CLI)
//! GixBackend          --> work-tree discovery only (pure Rust gix)
//! ```
//!
//! Methods take `&self` so the orchestrator can run against any implementor,
//! including an in-memory recorder in tests.

use crate::error::{GitError, GixError, ProcessError, SubsyncResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, trace};

/// File mode git uses for gitlink (submodule) index entries.
const GITLINK_MODE: &str = "160000";

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(&self, path: &Path) -> SubsyncResult<Option<String>>;

    /// Check if the index of `repo_path` has an entry for `submodule_path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or index access fails.
    fn is_registered(&self, repo_path: &Path, submodule_path: &str) -> SubsyncResult<bool>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    fn has_uncommitted_changes(&self, path: &Path) -> SubsyncResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Git mutation operations that modify repository or remote state.
pub trait GitMutation {
    /// Register a new submodule tracking `branch`, replacing whatever was at the path.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git submodule add` fails.
    fn add_submodule(
        &self,
        repo_path: &Path,
        name: &str,
        url: &str,
        branch: &str,
        submodule_path: &str,
    ) -> SubsyncResult<()>;

    /// Initialize and check out a registered submodule, nested ones included.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `git submodule update` fails.
    fn update_submodule(&self, repo_path: &Path, submodule_path: &str) -> SubsyncResult<()>;

    /// Fetch from remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch operation fails.
    fn fetch(&self, repo_path: &Path, remote: &str) -> SubsyncResult<()>;

    /// Checkout an existing local branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(&self, repo_path: &Path, branch: &str) -> SubsyncResult<()>;

    /// Create `branch` tracking `remote/branch` and check it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    fn checkout_tracking(&self, repo_path: &Path, branch: &str, remote: &str)
    -> SubsyncResult<()>;

    /// Checkout `branch`, creating it from `remote/branch` when the plain checkout fails.
    ///
    /// The first failure is not inspected: a missing local branch and any other
    /// checkout problem both take the create-and-track path.
    ///
    /// # Errors
    ///
    /// Returns the error of the fallback checkout.
    fn checkout_or_create(&self, repo_path: &Path, branch: &str, remote: &str) -> SubsyncResult<()> {
        match self.checkout(repo_path, branch) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(branch, error = %e, "checkout failed, creating tracking branch");
                self.checkout_tracking(repo_path, branch, remote)
            }
        }
    }

    /// Pull `branch` from `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull operation fails.
    fn pull(&self, repo_path: &Path, remote: &str, branch: &str) -> SubsyncResult<()>;

    /// Stage every change in the working tree (`git add -A`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn stage_all(&self, repo_path: &Path) -> SubsyncResult<()>;

    /// Commit the index with `message`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails.
    fn commit(&self, repo_path: &Path, message: &str) -> SubsyncResult<()>;

    /// Push `branch` to `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or the remote is unreachable.
    fn push(&self, repo_path: &Path, remote: &str, branch: &str) -> SubsyncResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Read-only; used to locate the work tree without spawning a subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct GixBackend;

impl GixBackend {
    /// Work-tree root of the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if no repository is found or it is bare.
    pub fn worktree_root(path: &Path) -> SubsyncResult<PathBuf> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(workdir.to_path_buf())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Every invocation runs with `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`,
/// prefixed by `-c key=value` for each configured extra setting.
#[derive(Debug, Clone, Default)]
pub struct ShellBackend {
    extra_config: Vec<String>,
}

impl ShellBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extra_config: Vec::new(),
        }
    }

    /// Backend passing `-c <entry>` for every entry (`key=value`).
    #[must_use]
    pub const fn with_extra_config(extra_config: Vec<String>) -> Self {
        Self { extra_config }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> SubsyncResult<Output> {
        let mut command = Command::new("git");
        for entry in &self.extra_config {
            command.args(["-c", entry]);
        }
        command
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0");

        debug!(cwd = %cwd.display(), "git {}", args.join(" "));
        let output = command.output().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ProcessError::ExecutableNotFound {
                    name: "git".to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: format!("git {}", args.join(" ")),
                    source,
                }
            }
        })?;
        trace!(stdout = %String::from_utf8_lossy(&output.stdout).trim(), "git output");
        Ok(output)
    }

    /// Execute a git command and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` with git's stderr on non-zero exit.
    pub fn git_command(&self, args: &[&str], cwd: &Path) -> SubsyncResult<String> {
        let output = self.run(args, cwd)?;
        if !output.status.success() {
            return Err(command_failed(args, &output).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Read a single value from a config file (`git config --file`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` for failures other than "key not set".
    pub fn config_get(&self, repo_path: &Path, file: &str, key: &str) -> SubsyncResult<Option<String>> {
        let args = ["config", "--file", file, "--get", key];
        let output = self.run(&args, repo_path)?;
        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            // Exit status 1: the key is not set
            Some(1) => Ok(None),
            _ => Err(command_failed(&args, &output).into()),
        }
    }

    /// Read every `(key, value)` pair whose key matches `pattern`, in file order.
    ///
    /// Uses `-z` output, so subsection names may contain spaces.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` for failures other than "no match".
    pub fn config_get_regexp(
        &self,
        repo_path: &Path,
        file: &str,
        pattern: &str,
    ) -> SubsyncResult<Vec<(String, String)>> {
        let args = ["config", "--file", file, "-z", "--get-regexp", pattern];
        let output = self.run(&args, repo_path)?;
        match output.status.code() {
            // Entries end in NUL; key and value are separated by a newline
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout)
                .split('\0')
                .filter(|entry| !entry.is_empty())
                .map(|entry| {
                    let (key, value) = entry.split_once('\n').unwrap_or((entry, ""));
                    (key.to_string(), value.to_string())
                })
                .collect()),
            Some(1) => Ok(Vec::new()),
            _ => Err(command_failed(&args, &output).into()),
        }
    }
}

fn command_failed(args: &[&str], output: &Output) -> GitError {
    GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl GitMutation for ShellBackend {
    fn add_submodule(
        &self,
        repo_path: &Path,
        name: &str,
        url: &str,
        branch: &str,
        submodule_path: &str,
    ) -> SubsyncResult<()> {
        self.git_command(
            &[
                "submodule",
                "add",
                "--quiet",
                "--force",
                "--name",
                name,
                "-b",
                branch,
                url,
                submodule_path,
            ],
            repo_path,
        )?;
        Ok(())
    }

    fn update_submodule(&self, repo_path: &Path, submodule_path: &str) -> SubsyncResult<()> {
        self.git_command(
            &[
                "submodule",
                "update",
                "--quiet",
                "--init",
                "--recursive",
                "--",
                submodule_path,
            ],
            repo_path,
        )?;
        Ok(())
    }

    fn fetch(&self, repo_path: &Path, remote: &str) -> SubsyncResult<()> {
        self.git_command(&["fetch", "--quiet", remote], repo_path)?;
        Ok(())
    }

    fn checkout(&self, repo_path: &Path, branch: &str) -> SubsyncResult<()> {
        self.git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", branch],
            repo_path,
        )?;
        Ok(())
    }

    fn checkout_tracking(
        &self,
        repo_path: &Path,
        branch: &str,
        remote: &str,
    ) -> SubsyncResult<()> {
        let upstream = format!("{remote}/{branch}");
        self.git_command(
            &["checkout", "-q", "-b", branch, "--track", &upstream],
            repo_path,
        )?;
        Ok(())
    }

    fn pull(&self, repo_path: &Path, remote: &str, branch: &str) -> SubsyncResult<()> {
        self.git_command(
            &["pull", "--recurse-submodules", "--quiet", remote, branch],
            repo_path,
        )?;
        Ok(())
    }

    fn stage_all(&self, repo_path: &Path) -> SubsyncResult<()> {
        self.git_command(&["add", "-A"], repo_path)?;
        Ok(())
    }

    fn commit(&self, repo_path: &Path, message: &str) -> SubsyncResult<()> {
        self.git_command(&["commit", "--quiet", "-m", message], repo_path)?;
        Ok(())
    }

    fn push(&self, repo_path: &Path, remote: &str, branch: &str) -> SubsyncResult<()> {
        self.git_command(&["push", "--quiet", remote, branch], repo_path)?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn current_branch(&self, path: &Path) -> SubsyncResult<Option<String>> {
        self.git_command(&["symbolic-ref", "--short", "-q", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }

    fn is_registered(&self, repo_path: &Path, submodule_path: &str) -> SubsyncResult<bool> {
        let output = self.git_command(
            &[
                "ls-files",
                "--stage",
                "--",
                submodule_path.trim_end_matches('/'),
            ],
            repo_path,
        )?;
        Ok(output
            .lines()
            .any(|line| line.split_whitespace().next() == Some(GITLINK_MODE)))
    }

    fn has_uncommitted_changes(&self, path: &Path) -> SubsyncResult<bool> {
        let output = self.git_command(&["status", "--porcelain"], path)?;
        Ok(!output.is_empty())
    }
}

#[cfg(test)]
mod tests;
