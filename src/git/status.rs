// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status scan: index vs HEAD vs work tree.
//!
//! ```text
//! update-index --refresh          (optional, errors ignored)
//! ls-files -z                     --> TRACKED
//! diff-index --cached HEAD -z     --> STAGED   ('U' --> UNMERGED)
//!   (unborn HEAD: every tracked path is STAGED)
//! diff-files -z                   --> MODIFIED ('U' --> UNMERGED)
//! ls-files -z --others            --> UNTRACKED (optional)
//! ```
//!
//! All output is NUL-separated, so paths never need unquoting.

use bitflags::bitflags;
use bon::Builder;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, trace};

use super::backend::GitStatusSource;
use crate::error::StageResult;

bitflags! {
    /// Classification bits for a single path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PathState: u8 {
        /// Present in the index.
        const TRACKED = 1;
        /// Index differs from HEAD.
        const STAGED = 1 << 1;
        /// Work tree differs from index.
        const MODIFIED = 1 << 2;
        /// Neither tracked nor ignored.
        const UNTRACKED = 1 << 3;
        /// Has conflict stages in the index.
        const UNMERGED = 1 << 4;
    }
}

impl PathState {
    /// Two-letter code in the style of `git status --short`.
    #[must_use]
    pub fn short_code(self) -> &'static str {
        if self.contains(Self::UNMERGED) {
            "UU"
        } else if self.contains(Self::UNTRACKED) {
            "??"
        } else {
            match (self.contains(Self::STAGED), self.contains(Self::MODIFIED)) {
                (true, true) => "SM",
                (true, false) => "S ",
                (false, true) => " M",
                (false, false) => "  ",
            }
        }
    }
}

/// One entry of `--name-status -z` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStatus {
    /// First letter of the status field (`A`, `M`, `D`, `U`, `T`, ...).
    pub status: char,
    /// Path relative to the work tree root.
    pub path: String,
}

/// Parse `--name-status -z` output.
///
/// Rename and copy entries (`R100`, `C075`) carry two paths; the destination
/// is kept.
#[must_use]
pub fn parse_name_status(output: &[u8]) -> Vec<NameStatus> {
    let mut fields = output
        .split(|&b| b == 0)
        .filter(|field| !field.is_empty())
        .map(|field| String::from_utf8_lossy(field).into_owned());

    let mut entries = Vec::new();
    while let Some(status_field) = fields.next() {
        let Some(status) = status_field.chars().next() else {
            continue;
        };
        let Some(mut path) = fields.next() else {
            break;
        };
        if matches!(status, 'R' | 'C')
            && let Some(destination) = fields.next()
        {
            path = destination;
        }
        entries.push(NameStatus { status, path });
    }
    entries
}

/// Parse a NUL-separated path list (`ls-files -z`).
#[must_use]
pub fn parse_nul_list(output: &[u8]) -> Vec<String> {
    output
        .split(|&b| b == 0)
        .filter(|field| !field.is_empty())
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Options for [`scan`].
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    #[builder(setters(name = with_show_untracked), default = true)]
    show_untracked: bool,
    #[builder(setters(name = with_refresh_index), default = true)]
    refresh_index: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    /// Whether untracked files are listed.
    #[must_use]
    pub const fn show_untracked(&self) -> bool {
        self.show_untracked
    }

    /// Whether index stat info is refreshed first.
    #[must_use]
    pub const fn refresh_index(&self) -> bool {
        self.refresh_index
    }
}

/// Result of a status scan: every known path with its state bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusScan {
    head_unborn: bool,
    entries: BTreeMap<String, PathState>,
}

impl StatusScan {
    /// Whether the scan ran against a branch without commits.
    #[must_use]
    pub const fn head_unborn(&self) -> bool {
        self.head_unborn
    }

    /// All scanned paths and their states.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, PathState> {
        &self.entries
    }

    /// State of one path (empty when unknown).
    #[must_use]
    pub fn state_of(&self, path: &str) -> PathState {
        self.entries.get(path).copied().unwrap_or_default()
    }

    fn mark(&mut self, path: String, state: PathState) {
        *self.entries.entry(path).or_default() |= state;
    }

    fn mark_change(&mut self, entry: NameStatus, changed: PathState) {
        let state = if entry.status == 'U' {
            PathState::UNMERGED
        } else {
            changed
        };
        self.mark(entry.path, state);
    }
}

/// Compare HEAD, index and work tree of the repository rooted at `root`.
///
/// # Errors
///
/// Returns a `GitError` if any of the underlying git commands fail.
pub fn scan<S: GitStatusSource>(
    source: &S,
    root: &Path,
    head_unborn: bool,
    options: &ScanOptions,
) -> StageResult<StatusScan> {
    if options.refresh_index()
        && let Err(e) = source.refresh_index(root)
    {
        debug!(error = %e, "index refresh reported stale entries");
    }

    let mut result = StatusScan {
        head_unborn,
        entries: BTreeMap::new(),
    };

    let tracked = source.tracked_files(root)?;
    if head_unborn {
        for path in &tracked {
            result.mark(path.clone(), PathState::STAGED);
        }
    } else {
        for entry in source.staged_changes(root)? {
            result.mark_change(entry, PathState::STAGED);
        }
    }
    for path in tracked {
        result.mark(path, PathState::TRACKED);
    }

    for entry in source.worktree_changes(root)? {
        result.mark_change(entry, PathState::MODIFIED);
    }

    if options.show_untracked() {
        for path in source.untracked_files(root)? {
            result.mark(path, PathState::UNTRACKED);
        }
    }

    trace!(
        root = %root.display(),
        head_unborn,
        paths = result.entries.len(),
        "status scanned"
    );
    Ok(result)
}
