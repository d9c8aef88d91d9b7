// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend (git from PATH) --> git
//! ```
//!
//! Convenience wrappers for callers that do not hold a configured backend.

use crate::error::StageResult;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Initialize a new repository.
///
/// # Errors
///
/// Returns a `GitError` if repository initialization fails.
pub fn init_repo(path: &Path) -> StageResult<()> {
    ShellBackend::default().init_repo(path)
}

/// Stage the given paths (`git add --all`).
///
/// # Errors
///
/// Returns a `GitError` if a path matches nothing or is ignored.
pub fn add_paths(repo: &Path, paths: &[String]) -> StageResult<()> {
    ShellBackend::default().add_paths(repo, paths)
}

/// Commit the index.
///
/// # Errors
///
/// Returns a `GitError` if there is nothing to commit or no identity is configured.
pub fn commit(repo: &Path, message: &str, sign_off: bool) -> StageResult<()> {
    ShellBackend::default().commit(repo, message, sign_off)
}

/// Set a repository-local git config value.
///
/// # Errors
///
/// Returns a `GitError` if the config value cannot be set.
pub fn set_config(repo: &Path, key: &str, value: &str) -> StageResult<()> {
    ShellBackend::default().git_command(&["config", key, value], repo)?;
    Ok(())
}
