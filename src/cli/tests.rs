// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["stagehand", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "stagehand",
        "-C",
        "/tmp/repo",
        "-l",
        "5",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "--log-json",
        "status",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.global.directory, Some(PathBuf::from("/tmp/repo")));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(matches!(cli.command, Some(Command::Status(ref args)) if args.json));
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "global.output_log_level=5",
        "global.file_log_level=5",
        "global.log_format=json",
    ]
    "#);
}

#[test]
fn test_set_overrides_come_first() {
    let cli = Cli::try_parse_from([
        "stagehand",
        "-s",
        "status.show_untracked=false",
        "--file-log-level",
        "6",
        "--log-file",
        "out.log",
        "everything",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "status.show_untracked=false",
        "global.file_log_level=6",
        "global.log_file=out.log",
    ]
    "#);
}

#[test]
fn test_parse_stage_paths() {
    let cli = Cli::try_parse_from(["stagehand", "stage", "foo", "the-file"]).unwrap();
    let Some(Command::Stage(args)) = cli.command else {
        panic!("expected stage command");
    };
    assert_eq!(args.paths, vec!["foo", "the-file"]);
}

#[test]
fn test_stage_requires_paths() {
    assert!(Cli::try_parse_from(["stagehand", "unstage"]).is_err());
    assert!(Cli::try_parse_from(["stagehand", "revert"]).is_err());
}

#[test]
fn test_parse_commit() {
    let cli = Cli::try_parse_from(["stagehand", "commit", "-m", "initial", "-s"]).unwrap();
    let Some(Command::Commit(args)) = cli.command else {
        panic!("expected commit command");
    };
    assert_eq!(args.message, "initial");
    assert!(args.sign_off);
    assert!(Cli::try_parse_from(["stagehand", "commit"]).is_err());
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["stagehand", "-l", "7", "status"]).is_err());
}

#[test]
fn test_working_directory_defaults_to_cwd() {
    let cli = Cli::try_parse_from(["stagehand", "branch"]).unwrap();
    assert_eq!(cli.global.working_directory(), PathBuf::from("."));
}

#[test]
fn test_parse_from_helper() {
    let cli = crate::cli::parse_from(["stagehand", "-C", "sub", "everything"]);
    assert!(matches!(cli.command, Some(Command::Everything)));
    assert_eq!(cli.global.working_directory(), PathBuf::from("sub"));
}
