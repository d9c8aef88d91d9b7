// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   query.rs  cmd.rs  status.rs
//!        \      |      /
//!         v     v     v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation + GitStatusSource
//!   (gix, read)  (CLI, write / diff)
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .work_tree  .add / .reset / .rm --cached
//!    .branch     .checkout / .commit
//!    .unborn     .diff-index / .diff-files / .ls-files
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess, read-only.
//! **`ShellBackend`**: git CLI for index and work tree changes.

pub mod backend;
pub mod cmd;
pub mod query;
pub mod status;
