// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::{LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_format, LogFormat::Text);
    assert!(config.global.log_file.is_none());
    assert!(config.git.executable.is_none());
    assert!(config.status.show_untracked);
    assert!(config.status.refresh_index);
}

#[test]
fn test_format_options_default() {
    let options = Config::default().format_options();
    insta::assert_snapshot!(
        options.join("\n"),
        @r"
    global.file_log_level = 5
    global.log_format = text
    global.output_log_level = 3
    status.refresh_index = true
    status.show_untracked = true
    "
    );
}

#[test]
fn test_format_options_includes_set_paths() {
    let mut config = Config::default();
    config.git.executable = Some(PathBuf::from("/opt/git/bin/git"));
    let options = config.format_options();
    assert!(options.contains(&"git.executable = /opt/git/bin/git".to_string()));
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_format = "json"

[git]
executable = "/usr/local/bin/git"

[status]
show_untracked = false
"#,
    )
    .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(
        config.git.executable,
        Some(PathBuf::from("/usr/local/bin/git"))
    );
    assert!(!config.status.show_untracked);
    assert!(config.status.refresh_index);
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let result = Config::parse("[status]\nshow_ignored = true\n");
    assert!(result.is_err(), "unknown keys should be rejected");
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err(), "log level 9 should be rejected");
}

#[test]
fn test_validate_rejects_empty_executable() {
    let result = Config::parse("[git]\nexecutable = \"\"\n");
    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("executable"),
        "error message should mention executable, got: {err_msg}"
    );
}

#[test]
fn test_set_assignment_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[status]\nshow_untracked = true\n")
        .set_assignment("status.show_untracked=false")
        .unwrap()
        .set_assignment("global.output_log_level = 2")
        .unwrap()
        .build()
        .unwrap();
    assert!(!config.status.show_untracked);
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
}

#[test]
fn test_set_assignment_requires_equals() {
    let result = ConfigLoader::new().set_assignment("status.show_untracked");
    assert!(result.is_err());
    let result = ConfigLoader::new().set_assignment("=true");
    assert!(result.is_err());
}

#[test]
fn test_loaded_files_tracks_sources() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("definitely-missing-stagehand.toml");
    let files = loader.format_loaded_files();
    assert_eq!(files, vec!["1. [string] <string>".to_string()]);
}
