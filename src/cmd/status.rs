// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only commands: `status`, `everything`, `branch`.
//!
//! ```text
//! On branch main
//! S  foo/bar/baz
//!  M the-file
//! ?? notes.txt
//! ```

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

use super::open_model;
use crate::cli::paths::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::model::MainModel;

/// Serializable view of one scan, for `status --json`.
#[derive(Debug, Serialize)]
pub struct StatusReport<'a> {
    pub branch: Option<&'a str>,
    pub head_unborn: bool,
    pub staged: &'a BTreeSet<String>,
    pub modified: &'a BTreeSet<String>,
    pub untracked: &'a BTreeSet<String>,
    pub unmerged: &'a BTreeSet<String>,
}

impl<'a> StatusReport<'a> {
    #[must_use]
    pub fn new(model: &'a MainModel) -> Self {
        Self {
            branch: model.current_branch(),
            head_unborn: model.head_unborn(),
            staged: model.staged(),
            modified: model.modified(),
            untracked: model.untracked(),
            unmerged: model.unmerged(),
        }
    }
}

/// Header line describing HEAD.
#[must_use]
pub fn branch_line(model: &MainModel) -> String {
    match (model.current_branch(), model.head_unborn()) {
        (Some(branch), true) => format!("On branch {branch} (no commits yet)"),
        (Some(branch), false) => format!("On branch {branch}"),
        (None, _) => "HEAD detached".to_string(),
    }
}

/// Short-format lines for every path that is not clean.
#[must_use]
pub fn format_status(model: &MainModel) -> Vec<String> {
    model
        .everything()
        .into_iter()
        .filter_map(|path| {
            let code = model.state_of(&path).short_code();
            (code != "  ").then(|| format!("{code} {path}"))
        })
        .collect()
}

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the scan fails or the report cannot be serialized.
pub fn run_status_command(args: &StatusArgs, config: &Config, cwd: &Path) -> Result<()> {
    let model = open_model(cwd, config)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&StatusReport::new(&model))?
        );
        return Ok(());
    }

    println!("{}", branch_line(&model));
    let lines = format_status(&model);
    if lines.is_empty() {
        println!("nothing to commit, working tree clean");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Run the everything command.
///
/// # Errors
///
/// Returns an error if the scan fails.
pub fn run_everything_command(config: &Config, cwd: &Path) -> Result<()> {
    let model = open_model(cwd, config)?;
    for path in model.everything() {
        println!("{path}");
    }
    Ok(())
}

/// Run the branch command.
///
/// # Errors
///
/// Returns an error if the scan fails.
pub fn run_branch_command(config: &Config, cwd: &Path) -> Result<()> {
    let model = open_model(cwd, config)?;
    println!("{}", branch_line(&model));
    Ok(())
}
