// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutating path commands: `stage`, `unstage`, `revert`.
//!
//! Each prints the affected paths, one per line.

use std::path::Path;
use tracing::debug;

use super::open_model;
use crate::cli::paths::PathArgs;
use crate::config::Config;
use crate::error::Result;
use crate::model::message::Message;

/// Which model operation a path command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCommand {
    Stage,
    Unstage,
    Revert,
}

impl PathCommand {
    /// Message the model publishes for this command.
    #[must_use]
    pub const fn message(self) -> Message {
        match self {
            Self::Stage => Message::PathsStaged,
            Self::Unstage => Message::PathsUnstaged,
            Self::Revert => Message::PathsReverted,
        }
    }
}

/// Run a path command.
///
/// # Errors
///
/// Returns an error if a path escapes the work tree or git fails.
pub fn run_path_command(
    command: PathCommand,
    args: &PathArgs,
    config: &Config,
    cwd: &Path,
) -> Result<()> {
    let mut model = open_model(cwd, config)?;
    model.add_message_observer(command.message(), |message, paths| {
        debug!(%message, count = paths.len(), "observer notified");
    });

    let affected = match command {
        PathCommand::Stage => model.stage_paths(&args.paths)?,
        PathCommand::Unstage => model.unstage_paths(&args.paths)?,
        PathCommand::Revert => model.revert_paths(&args.paths)?,
    };

    for path in affected {
        println!("{path}");
    }
    Ok(())
}
