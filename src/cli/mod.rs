// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for stagehand-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! stagehand [global options] <command>
//! version | options | inis
//! status [--json]
//! everything
//! branch
//! stage <PATH>...
//! unstage <PATH>...
//! revert <PATH>...
//! commit -m MSG [-s]
//! ```

pub mod global;
pub mod paths;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::paths::{CommitArgs, PathArgs, StatusArgs};
use clap::{Parser, Subcommand};

/// Interactive git staging model.
#[derive(Debug, Parser)]
#[command(
    name = "stagehand",
    author,
    version,
    about = "Interactive git staging model",
    long_about = "stagehand-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Classifies paths as staged, modified or untracked and stages,\n\
                  unstages or reverts them. Every mutating command prints the\n\
                  affected paths: the inputs, every file beneath a directory\n\
                  input and every ancestor directory.",
    after_help = "CONFIG FILES:\n\n\
                  stagehand reads `stagehand.toml` from the current directory if\n\
                  present, then every file given with --config. STAGEHAND_*\n\
                  environment variables (e.g. STAGEHAND_GIT__EXECUTABLE) and\n\
                  --set overrides are applied last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in use.
    Inis,

    /// Shows staged, modified, untracked and unmerged paths.
    Status(StatusArgs),

    /// Lists every known path.
    Everything,

    /// Shows the current branch.
    Branch,

    /// Stages paths (`git add --all`).
    Stage(PathArgs),

    /// Unstages paths.
    Unstage(PathArgs),

    /// Discards changes to paths.
    Revert(PathArgs),

    /// Commits the staged paths.
    Commit(CommitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
