// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The main model: classified paths plus staging operations.
//!
//! ```text
//! stage_paths / unstage_paths / revert_paths
//!        |
//!        v
//!  normalize inputs ──> git add | reset | rm --cached | checkout
//!        |
//!        v
//!  update_status()  ──> staged / modified / untracked / unmerged
//!        |
//!        v
//!  affected::expand(inputs, known before ∪ after)
//!        |
//!        v
//!  MessageBus::notify(PathsStaged | PathsUnstaged | PathsReverted)
//! ```
//!
//! The path sets are derived: only a status scan rewrites them.

pub mod affected;
pub mod message;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{StageResult, bail_out};
use crate::git::backend::{CheckoutSource, GitMutation, ShellBackend};
use crate::git::query;
use crate::git::status::{self, PathState, ScanOptions, StatusScan};

use message::{Message, MessageBus, Notification, ObserverId};

/// Leaf path sets derived from one scan.
///
/// A file is in at most one of `staged`, `modified`, `untracked`,
/// `unmerged`. Staged wins over modified.
#[derive(Debug, Clone, Default)]
struct PathSets {
    staged: BTreeSet<String>,
    modified: BTreeSet<String>,
    untracked: BTreeSet<String>,
    unmerged: BTreeSet<String>,
    tracked: BTreeSet<String>,
}

impl PathSets {
    fn from_scan(scan: &StatusScan) -> Self {
        let mut sets = Self::default();
        for (path, state) in scan.entries() {
            if state.contains(PathState::TRACKED) {
                sets.tracked.insert(path.clone());
            }
            let target = if state.contains(PathState::UNMERGED) {
                &mut sets.unmerged
            } else if state.contains(PathState::STAGED) {
                &mut sets.staged
            } else if state.contains(PathState::MODIFIED) {
                &mut sets.modified
            } else if state.contains(PathState::UNTRACKED) {
                &mut sets.untracked
            } else {
                continue;
            };
            target.insert(path.clone());
        }
        sets
    }
}

/// Working tree model for an interactive staging client.
#[derive(Debug)]
pub struct MainModel {
    cwd: PathBuf,
    root: Option<PathBuf>,
    base: String,
    git: ShellBackend,
    options: ScanOptions,
    scan: Option<StatusScan>,
    sets: PathSets,
    branch: Option<String>,
    observers: MessageBus,
}

impl MainModel {
    /// Model for the work tree containing `cwd`, using `git` from PATH.
    ///
    /// Nothing is read until [`update_status`](Self::update_status) or a
    /// mutating operation runs.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            root: None,
            base: String::new(),
            git: ShellBackend::default(),
            options: ScanOptions::default(),
            scan: None,
            sets: PathSets::default(),
            branch: None,
            observers: MessageBus::new(),
        }
    }

    /// Model configured from the `[git]` and `[status]` sections.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git cannot be located.
    pub fn from_config(cwd: impl Into<PathBuf>, config: &Config) -> StageResult<Self> {
        let git = ShellBackend::locate(config.git.executable.as_deref())?;
        let options = ScanOptions::builder()
            .with_show_untracked(config.status.show_untracked)
            .with_refresh_index(config.status.refresh_index)
            .build();
        Ok(Self {
            git,
            options,
            ..Self::new(cwd)
        })
    }

    /// Replace the scan options.
    #[must_use]
    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    // --- Accessors ---

    /// Directory the model was created for. Relative inputs resolve here.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Work tree root found by the last scan.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Paths whose index entry differs from HEAD.
    #[must_use]
    pub const fn staged(&self) -> &BTreeSet<String> {
        &self.sets.staged
    }

    /// Paths whose work tree content differs from the index (and are not staged).
    #[must_use]
    pub const fn modified(&self) -> &BTreeSet<String> {
        &self.sets.modified
    }

    /// Files neither tracked nor ignored.
    #[must_use]
    pub const fn untracked(&self) -> &BTreeSet<String> {
        &self.sets.untracked
    }

    /// Paths with unresolved conflicts.
    #[must_use]
    pub const fn unmerged(&self) -> &BTreeSet<String> {
        &self.sets.unmerged
    }

    /// Every path in the index.
    #[must_use]
    pub const fn tracked(&self) -> &BTreeSet<String> {
        &self.sets.tracked
    }

    /// Current branch (None if detached or not yet scanned).
    #[must_use]
    pub fn current_branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Whether the current branch has no commits yet.
    #[must_use]
    pub fn head_unborn(&self) -> bool {
        self.scan.as_ref().is_some_and(StatusScan::head_unborn)
    }

    /// Fine-grained state of one path.
    #[must_use]
    pub fn state_of(&self, path: &str) -> PathState {
        self.scan
            .as_ref()
            .map_or_else(PathState::empty, |scan| scan.state_of(path))
    }

    /// Every known path, sorted: tracked, staged, modified and untracked.
    #[must_use]
    pub fn everything(&self) -> Vec<String> {
        self.known_paths().into_iter().collect()
    }

    /// True when nothing is staged, modified, untracked or unmerged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.sets.staged.is_empty()
            && self.sets.modified.is_empty()
            && self.sets.untracked.is_empty()
            && self.sets.unmerged.is_empty()
    }

    // --- Observers ---

    /// Register `callback` for `message`.
    pub fn add_message_observer<F>(&mut self, message: Message, callback: F) -> ObserverId
    where
        F: FnMut(Message, &BTreeSet<String>) + 'static,
    {
        self.observers.add_message_observer(message, callback)
    }

    /// Remove an observer registered with `add_message_observer`.
    pub fn remove_message_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove_message_observer(id)
    }

    /// Receive `message` notifications over a channel.
    pub fn subscribe(&mut self, message: Message) -> flume::Receiver<Notification> {
        self.observers.subscribe(message)
    }

    // --- Operations ---

    /// Rescan the repository and rebuild every path set.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if `cwd` is not inside a work tree,
    /// or a `GitError` if a git command fails.
    #[instrument(skip_all, fields(cwd = %self.cwd.display()))]
    pub fn update_status(&mut self) -> StageResult<()> {
        let cwd = std::path::absolute(&self.cwd)?;
        let root = query::work_tree_root(&cwd)?;
        let head_unborn = query::is_head_unborn(&root)?;
        let result = status::scan(&self.git, &root, head_unborn, &self.options)?;

        self.branch = query::current_branch(&root)?;
        self.sets = PathSets::from_scan(&result);
        self.scan = Some(result);
        self.base = affected::relative_dir(&root, &cwd);
        self.root = Some(root);

        debug!(
            staged = self.sets.staged.len(),
            modified = self.sets.modified.len(),
            untracked = self.sets.untracked.len(),
            unmerged = self.sets.unmerged.len(),
            "status updated"
        );
        self.observers
            .notify(Message::StatusUpdated, &BTreeSet::new());
        Ok(())
    }

    /// Stage `paths` (directories recurse) and publish [`Message::PathsStaged`].
    ///
    /// Returns the affected paths: inputs, known descendants and ancestors.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a path escapes the repository, matches nothing,
    /// or git fails. No notification is sent on error.
    #[instrument(skip_all, fields(count = paths.len()))]
    pub fn stage_paths<S: AsRef<str>>(&mut self, paths: &[S]) -> StageResult<BTreeSet<String>> {
        self.apply(Message::PathsStaged, paths, |git, root, _, paths| {
            git.add_paths(root, paths)
        })
    }

    /// Unstage `paths` and publish [`Message::PathsUnstaged`].
    ///
    /// Without a HEAD commit the index entries are dropped, so the files
    /// become untracked.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a path escapes the repository or git fails.
    #[instrument(skip_all, fields(count = paths.len()))]
    pub fn unstage_paths<S: AsRef<str>>(&mut self, paths: &[S]) -> StageResult<BTreeSet<String>> {
        self.apply(Message::PathsUnstaged, paths, |git, root, unborn, paths| {
            if unborn {
                git.remove_cached(root, paths)
            } else {
                git.reset_paths(root, paths)
            }
        })
    }

    /// Discard changes to `paths` and publish [`Message::PathsReverted`].
    ///
    /// Index and work tree are restored from HEAD. Without a HEAD commit the
    /// work tree is restored from the index and the index entries are then
    /// dropped, so the files end up untracked.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if a path escapes the repository, is unknown to
    /// the restore source, or git fails.
    #[instrument(skip_all, fields(count = paths.len()))]
    pub fn revert_paths<S: AsRef<str>>(&mut self, paths: &[S]) -> StageResult<BTreeSet<String>> {
        self.apply(Message::PathsReverted, paths, |git, root, unborn, paths| {
            if unborn {
                git.checkout_paths(root, CheckoutSource::Index, paths)?;
                git.remove_cached(root, paths)
            } else {
                git.checkout_paths(root, CheckoutSource::Head, paths)
            }
        })
    }

    /// Commit the index and publish [`Message::Committed`] with the
    /// committed paths and their ancestors.
    ///
    /// The index is rescanned first, so changes made outside the model are
    /// reported too.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if nothing is staged or git fails.
    #[instrument(skip_all)]
    pub fn commit(&mut self, message: &str, sign_off: bool) -> StageResult<BTreeSet<String>> {
        self.update_status()?;
        let root = self.scanned_root()?;
        let committed = self.sets.staged.clone();
        info!(paths = committed.len(), "committing");

        self.git.commit(&root, message, sign_off)?;
        self.update_status()?;

        let affected = affected::expand(&committed, &BTreeSet::new());
        self.observers.notify(Message::Committed, &affected);
        Ok(affected)
    }

    // --- Internals ---

    fn known_paths(&self) -> BTreeSet<String> {
        self.scan
            .as_ref()
            .map(|scan| scan.entries().keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Work tree root, scanning first if the model has never been scanned.
    fn scanned_root(&mut self) -> StageResult<PathBuf> {
        if self.scan.is_none() {
            self.update_status()?;
        }
        self.root
            .clone()
            .ok_or_else(|| bail_out("status scan did not record a work tree root"))
    }

    fn apply<S, F>(&mut self, message: Message, paths: &[S], op: F) -> StageResult<BTreeSet<String>>
    where
        S: AsRef<str>,
        F: FnOnce(&ShellBackend, &Path, bool, &[String]) -> StageResult<()>,
    {
        if paths.is_empty() {
            return Ok(BTreeSet::new());
        }

        let root = self.scanned_root()?;
        let inputs = affected::normalize_all(&root, &self.base, paths)?;
        let args: Vec<String> = inputs.iter().cloned().collect();
        info!(%message, paths = ?args, "applying");

        let mut known = self.known_paths();
        op(&self.git, &root, self.head_unborn(), &args)?;
        self.update_status()?;
        known.extend(self.known_paths());

        let affected = affected::expand(&inputs, &known);
        debug!(%message, affected = affected.len(), "publishing");
        self.observers.notify(message, &affected);
        Ok(affected)
    }
}
