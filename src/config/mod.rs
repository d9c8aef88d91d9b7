// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for stagehand-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. stagehand.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. STAGEHAND_* env vars
//! 5. --set key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! STAGEHAND_GIT__EXECUTABLE=/usr/bin/git   → git.executable
//! STAGEHAND_STATUS__SHOW_UNTRACKED=false   → status.show_untracked
//! STAGEHAND_GLOBAL__OUTPUT_LOG_LEVEL=4     → global.output_log_level
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, StatusConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git executable options.
    pub git: GitConfig,
    /// Status scan options.
    pub status: StatusConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stagehand_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("stagehand.toml")
    ///     .with_env_prefix("STAGEHAND")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if `git.executable` is empty.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(executable) = &self.git.executable
            && executable.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "executable".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// One `section.key = value` line per option, in deterministic order.
    /// Unset optional values are omitted.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        if let Ok(serde_json::Value::Object(sections)) = serde_json::to_value(self) {
            for (section, value) in sections {
                let serde_json::Value::Object(fields) = value else {
                    continue;
                };
                for (key, value) in fields {
                    let rendered = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    options.insert(format!("{section}.{key}"), rendered);
                }
            }
        }
        options
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect()
    }
}
