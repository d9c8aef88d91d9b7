// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit command for stagehand-rs.

use anyhow::bail;
use std::path::Path;

use super::open_model;
use crate::cli::paths::CommitArgs;
use crate::config::Config;
use crate::error::Result;

/// Run the commit command.
///
/// # Errors
///
/// Returns an error if nothing is staged or `git commit` fails.
pub fn run_commit_command(args: &CommitArgs, config: &Config, cwd: &Path) -> Result<()> {
    let mut model = open_model(cwd, config)?;
    if model.staged().is_empty() {
        bail!("nothing staged to commit");
    }

    let committed = model.commit(&args.message, args.sign_off)?;
    println!(
        "committed {} path(s) on {}",
        committed.len(),
        model.current_branch().unwrap_or("detached HEAD")
    );
    Ok(())
}
