// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input normalization and affected-path expansion.
//!
//! ```text
//! inputs {foo}          known {foo/bar/baz, the-file}
//!    |                     |
//!    +-- descendants ------+   foo/bar/baz
//!    +-- ancestors             foo/bar, foo
//!    v
//! affected {foo, foo/bar, foo/bar/baz}
//! ```
//!
//! Paths are repository-relative with `/` separators. Relative inputs are
//! resolved against the model's working directory; `.` there names that
//! directory, which is the root when the model starts at the top.

use std::collections::BTreeSet;
use std::io;
use std::ops::Bound;
use std::path::{Component, Path, PathBuf};

use crate::error::{GitError, StageResult};

/// The repository root as an input path.
pub const ROOT: &str = ".";

/// Directory of `cwd` relative to `root`, `""` for the root itself.
///
/// Falls back to canonical paths when `cwd` reaches the work tree through a
/// symlink, and to the root when `cwd` is not beneath it at all.
#[must_use]
pub fn relative_dir(root: &Path, cwd: &Path) -> String {
    let relative = cwd
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .or_else(|_| -> io::Result<PathBuf> {
            let root = root.canonicalize()?;
            let cwd = cwd.canonicalize()?;
            cwd.strip_prefix(&root)
                .map(Path::to_path_buf)
                .map_err(io::Error::other)
        });
    relative.map_or_else(
        |_| String::new(),
        |dir| {
            dir.components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("/")
        },
    )
}

/// Turn a user-supplied path into a repository-relative one.
///
/// Relative inputs start at `base` (a repository-relative directory, `""`
/// for the root). Strips `./` and trailing separators, resolves `..`
/// lexically and makes absolute paths inside `root` relative.
///
/// # Errors
///
/// Returns `GitError::PathOutsideRepository` if the path escapes `root`.
pub fn normalize(root: &Path, base: &str, input: &str) -> StageResult<String> {
    let outside = || GitError::PathOutsideRepository {
        path: input.to_string(),
    };

    let path = Path::new(input);
    let mut parts: Vec<String> = Vec::new();
    let relative = if path.is_absolute() {
        path.strip_prefix(root).map_err(|_| outside())?
    } else {
        parts.extend(
            base.split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_owned),
        );
        path
    };

    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop().ok_or_else(outside)?;
            }
            Component::RootDir | Component::Prefix(_) => return Err(outside().into()),
        }
    }

    if parts.is_empty() {
        Ok(ROOT.to_string())
    } else {
        Ok(parts.join("/"))
    }
}

/// Normalize every input, dropping duplicates.
///
/// # Errors
///
/// Returns the first normalization error.
pub fn normalize_all<S: AsRef<str>>(
    root: &Path,
    base: &str,
    inputs: &[S],
) -> StageResult<BTreeSet<String>> {
    inputs
        .iter()
        .map(|input| normalize(root, base, input.as_ref()))
        .collect()
}

/// Proper ancestor directories of `path`, nearest first.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    let mut rest = path;
    std::iter::from_fn(move || {
        let (parent, _) = rest.rsplit_once('/')?;
        rest = parent;
        Some(parent)
    })
}

/// Every input, every known path beneath an input, and all their ancestors.
#[must_use]
pub fn expand(inputs: &BTreeSet<String>, known: &BTreeSet<String>) -> BTreeSet<String> {
    let mut affected = BTreeSet::new();

    for input in inputs {
        affected.insert(input.clone());
        if input == ROOT {
            affected.extend(known.iter().cloned());
            continue;
        }
        let prefix = format!("{input}/");
        affected.extend(
            known
                .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
                .take_while(|path| path.starts_with(&prefix))
                .cloned(),
        );
    }

    let parents: Vec<String> = affected
        .iter()
        .flat_map(|path| ancestors(path).map(str::to_owned))
        .collect();
    affected.extend(parents);
    affected
}
