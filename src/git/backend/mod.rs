// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)          --> GixBackend (pure Rust gix)
//! GitMutation (write)      --> ShellBackend (git CLI)
//! GitStatusSource (diffs)  --> ShellBackend (git CLI, -z output)
//! ```

use crate::error::{GitError, GixError, ProcessError, StageResult};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::status::{NameStatus, parse_name_status, parse_nul_list};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without modification.
pub trait GitQuery {
    /// Top-level directory of the work tree containing `path`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if no work tree contains `path`.
    fn work_tree_root(&self, path: &Path) -> StageResult<PathBuf>;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(&self, path: &Path) -> StageResult<Option<String>>;

    /// Check whether HEAD points to a branch without commits.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn is_head_unborn(&self, path: &Path) -> StageResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Where `checkout_paths` restores content from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutSource {
    /// Index and work tree from the HEAD commit.
    Head,
    /// Work tree from the index.
    Index,
}

/// Git mutation operations that modify index or work tree.
///
/// Paths are relative to `repo` (the work tree root) and are passed to git
/// as literal pathspecs.
pub trait GitMutation {
    /// Initialize a new repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(&self, path: &Path) -> StageResult<()>;

    /// Stage content, additions and removals under the given paths.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a path matches nothing or is ignored.
    fn add_paths(&self, repo: &Path, paths: &[String]) -> StageResult<()>;

    /// Reset index entries to HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the reset fails.
    fn reset_paths(&self, repo: &Path, paths: &[String]) -> StageResult<()>;

    /// Drop index entries, keeping work tree files.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the removal fails.
    fn remove_cached(&self, repo: &Path, paths: &[String]) -> StageResult<()>;

    /// Discard changes by checking out paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a path is unknown to `source`.
    fn checkout_paths(
        &self,
        repo: &Path,
        source: CheckoutSource,
        paths: &[String],
    ) -> StageResult<()>;

    /// Record the index as a new commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if there is nothing to commit or no identity is configured.
    fn commit(&self, repo: &Path, message: &str, sign_off: bool) -> StageResult<()>;
}

// --- Status Trait (Index/work tree comparison) ---

/// Raw comparisons the status scan is built from.
pub trait GitStatusSource {
    /// Refresh index stat information so unchanged files are not reported.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the index cannot be refreshed.
    fn refresh_index(&self, repo: &Path) -> StageResult<()>;

    /// Index vs HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the diff fails (e.g. HEAD is unborn).
    fn staged_changes(&self, repo: &Path) -> StageResult<Vec<NameStatus>>;

    /// Work tree vs index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the diff fails.
    fn worktree_changes(&self, repo: &Path) -> StageResult<Vec<NameStatus>>;

    /// Files neither tracked nor ignored.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if listing fails.
    fn untracked_files(&self, repo: &Path) -> StageResult<Vec<String>>;

    /// Every path in the index.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if listing fails.
    fn tracked_files(&self, repo: &Path) -> StageResult<Vec<String>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct GixBackend;

impl GixBackend {
    fn discover(path: &Path) -> StageResult<gix::Repository> {
        Ok(gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?)
    }
}

impl GitQuery for GixBackend {
    fn work_tree_root(&self, path: &Path) -> StageResult<PathBuf> {
        let repo = gix::discover(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "repository discovery failed");
            GitError::RepoNotFound {
                path: path.display().to_string(),
            }
        })?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::Gix(GixError::BareRepository))?;
        Ok(workdir.to_path_buf())
    }

    fn current_branch(&self, path: &Path) -> StageResult<Option<String>> {
        let repo = Self::discover(path)?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn is_head_unborn(&self, path: &Path) -> StageResult<bool> {
        let repo = Self::discover(path)?;
        let head = repo
            .head()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.is_unborn())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using git CLI.
///
/// Required for:
/// - Index and work tree mutations (add, reset, rm, checkout, commit)
/// - Diffs that must respect the user's git configuration
#[derive(Debug, Clone)]
pub struct ShellBackend {
    executable: PathBuf,
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("git"),
        }
    }
}

impl ShellBackend {
    /// Resolve the git executable, either `configured` or `git` from PATH.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if it cannot be found.
    pub fn locate(configured: Option<&Path>) -> StageResult<Self> {
        let name = configured.unwrap_or_else(|| Path::new("git"));
        let executable = which::which(name).map_err(|e| {
            debug!(name = %name.display(), error = %e, "git lookup failed");
            ProcessError::ExecutableNotFound {
                name: name.display().to_string(),
            }
        })?;
        debug!(executable = %executable.display(), "using git");
        Ok(Self { executable })
    }

    /// The git executable this backend runs.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run git and return raw stdout.
    ///
    /// Sets `GCM_INTERACTIVE=never`, `GIT_TERMINAL_PROMPT=0` and
    /// `GIT_LITERAL_PATHSPECS=1`.
    pub(crate) fn run(&self, args: &[&str], cwd: &Path) -> StageResult<Vec<u8>> {
        use std::process::Command;

        let command = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), %command, "running git");

        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_LITERAL_PATHSPECS", "1")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output.stdout)
    }

    /// Run git and return trimmed stdout.
    pub(crate) fn git_command(&self, args: &[&str], cwd: &Path) -> StageResult<String> {
        let stdout = self.run(args, cwd)?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    /// Run a path-limited command: `args -- paths...`.
    fn with_paths(&self, args: &[&str], repo: &Path, paths: &[String]) -> StageResult<()> {
        let mut full: Vec<&str> = args.to_vec();
        full.push("--");
        full.extend(paths.iter().map(String::as_str));
        self.run(&full, repo)?;
        Ok(())
    }
}

impl GitMutation for ShellBackend {
    fn init_repo(&self, path: &Path) -> StageResult<()> {
        self.git_command(&["init", "--quiet"], path)?;
        Ok(())
    }

    fn add_paths(&self, repo: &Path, paths: &[String]) -> StageResult<()> {
        self.with_paths(&["add", "--all"], repo, paths)
    }

    fn reset_paths(&self, repo: &Path, paths: &[String]) -> StageResult<()> {
        self.with_paths(&["reset", "-q", "HEAD"], repo, paths)
    }

    fn remove_cached(&self, repo: &Path, paths: &[String]) -> StageResult<()> {
        self.with_paths(
            &["rm", "--cached", "-r", "-q", "-f", "--ignore-unmatch"],
            repo,
            paths,
        )
    }

    fn checkout_paths(
        &self,
        repo: &Path,
        source: CheckoutSource,
        paths: &[String],
    ) -> StageResult<()> {
        match source {
            CheckoutSource::Head => self.with_paths(&["checkout", "-q", "HEAD"], repo, paths),
            CheckoutSource::Index => self.with_paths(&["checkout", "-q"], repo, paths),
        }
    }

    fn commit(&self, repo: &Path, message: &str, sign_off: bool) -> StageResult<()> {
        let mut args = vec!["commit", "-q", "-m", message];
        if sign_off {
            args.push("-s");
        }
        self.git_command(&args, repo)?;
        Ok(())
    }
}

impl GitStatusSource for ShellBackend {
    fn refresh_index(&self, repo: &Path) -> StageResult<()> {
        self.run(
            &["update-index", "-q", "--unmerged", "--ignore-missing", "--refresh"],
            repo,
        )?;
        Ok(())
    }

    fn staged_changes(&self, repo: &Path) -> StageResult<Vec<NameStatus>> {
        let stdout = self.run(
            &[
                "diff-index",
                "--cached",
                "--name-status",
                "--no-renames",
                "-z",
                "HEAD",
                "--",
            ],
            repo,
        )?;
        Ok(parse_name_status(&stdout))
    }

    fn worktree_changes(&self, repo: &Path) -> StageResult<Vec<NameStatus>> {
        let stdout = self.run(
            &["diff-files", "--name-status", "--no-renames", "-z", "--"],
            repo,
        )?;
        Ok(parse_name_status(&stdout))
    }

    fn untracked_files(&self, repo: &Path) -> StageResult<Vec<String>> {
        let stdout = self.run(&["ls-files", "-z", "--others", "--exclude-standard"], repo)?;
        Ok(parse_nul_list(&stdout))
    }

    fn tracked_files(&self, repo: &Path) -> StageResult<Vec<String>> {
        let stdout = self.run(&["ls-files", "-z"], repo)?;
        Ok(parse_nul_list(&stdout))
    }
}

#[cfg(test)]
mod tests;
