// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the model commands.
//!
//! ```text
//! stage|unstage|revert <PATH>...   → PathArgs
//! status [--json]                  → StatusArgs
//! commit -m MSG [-s]               → CommitArgs
//! ```

use clap::Args;

/// Paths for `stage`, `unstage` and `revert`.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Files or directories, relative to the work tree root or absolute.
    /// Directories recurse.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,
}

/// Arguments for `status`.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Prints the classification as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `commit`.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short = 'm', long, required = true)]
    pub message: String,

    /// Adds a Signed-off-by trailer.
    #[arg(short = 's', long = "signoff")]
    pub sign_off: bool,
}
