// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::StageResult;
use std::path::{Path, PathBuf};

use super::backend::{GitQuery, GixBackend};

/// Top-level directory of the work tree containing `path`.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if `path` is not inside a work tree, or
/// `GixError::BareRepository` for bare repositories.
pub fn work_tree_root(path: &Path) -> StageResult<PathBuf> {
    GixBackend.work_tree_root(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> StageResult<Option<String>> {
    GixBackend.current_branch(path)
}

/// Check whether the current branch has no commits yet.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn is_head_unborn(path: &Path) -> StageResult<bool> {
    GixBackend.is_head_unborn(path)
}
