// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use stagehand_rs::config::Config;
use stagehand_rs::config::loader::ConfigLoader;
use stagehand_rs::logging::{LogFormat, LogLevel};
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level = 5
    global.log_format = text
    global.output_log_level = 3
    status.refresh_index = true
    status.show_untracked = true
    ");
}

#[test]
fn config_parse_all_sections() {
    let toml = r#"
[global]
output_log_level = 2
file_log_level = 6
log_file = "stagehand.log"
log_format = "json"

[git]
executable = "/usr/bin/git"

[status]
show_untracked = false
refresh_index = false
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    git.executable = /usr/bin/git
    global.file_log_level = 6
    global.log_file = stagehand.log
    global.log_format = json
    global.output_log_level = 2
    status.refresh_index = false
    status.show_untracked = false
    ");
}

#[test]
fn config_parse_rejects_empty_executable() {
    let err = Config::parse("[git]\nexecutable = \"\"\n").expect_err("empty executable");
    assert!(err.to_string().contains("executable"), "{err}");
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    fs::write(&base, "[global]\noutput_log_level = 1\nlog_format = \"json\"\n").unwrap();
    fs::write(&local, "[global]\noutput_log_level = 4\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_format, LogFormat::Json);
}

#[test]
fn config_set_assignment_overrides_files() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("stagehand.toml");
    fs::write(&file, "[status]\nshow_untracked = true\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&file)
        .set_assignment("status.show_untracked=false")
        .unwrap()
        .set_assignment("git.executable=/opt/git/bin/git")
        .unwrap()
        .set_assignment("global.output_log_level=5")
        .unwrap()
        .build()
        .unwrap();

    assert!(!config.status.show_untracked);
    assert_eq!(
        config.git.executable,
        Some(PathBuf::from("/opt/git/bin/git"))
    );
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn config_set_assignment_requires_equals() {
    assert!(ConfigLoader::new().set_assignment("status.show_untracked").is_err());
    assert!(ConfigLoader::new().set_assignment("=true").is_err());
}

#[test]
fn config_missing_required_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_optional_file_is_listed_only_when_present() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("present.toml");
    fs::write(&present, "").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_file_optional(&present);

    let files = loader.loaded_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0], ("optional".to_string(), present.clone()));
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [optional] {}", present.display())]
    );
    assert!(loader.build().is_ok());
}

#[test]
fn config_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("stagehand.toml");
    fs::write(&file, "[status]\nrefresh_index = false\n").unwrap();

    let config = Config::from_file(&file).unwrap();
    assert!(!config.status.refresh_index);
    assert!(config.status.show_untracked);
}
