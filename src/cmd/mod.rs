// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> MainModel
//!   config, status, paths, commit
//! ```

pub mod commit;
pub mod config;
pub mod paths;
pub mod status;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::model::MainModel;

/// Model for `cwd`, configured and scanned.
///
/// # Errors
///
/// Returns an error if git cannot be located or `cwd` is not inside a work tree.
pub fn open_model(cwd: &Path, config: &Config) -> Result<MainModel> {
    let mut model = MainModel::from_config(cwd, config)?;
    model.update_status()?;
    Ok(model)
}
