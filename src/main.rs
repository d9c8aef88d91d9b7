// stagehand-rs: interactive git staging model
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Status | Everything | Branch | Stage | Unstage | Revert | Commit
//! ```

use std::process::ExitCode;

use stagehand_rs::cli::global::GlobalOptions;
use stagehand_rs::cli::{self, Command};
use stagehand_rs::cmd::commit::run_commit_command;
use stagehand_rs::cmd::config::{run_inis_command, run_options_command};
use stagehand_rs::cmd::paths::{PathCommand, run_path_command};
use stagehand_rs::cmd::status::{run_branch_command, run_everything_command, run_status_command};
use stagehand_rs::config::Config;
use stagehand_rs::config::loader::ConfigLoader;
use stagehand_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .with_format(config.global.log_format)
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let cwd = cli.global.working_directory();
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Status(args)) => run_status_command(args, config, &cwd),
        Some(Command::Everything) => run_everything_command(config, &cwd),
        Some(Command::Branch) => run_branch_command(config, &cwd),
        Some(Command::Stage(args)) => run_path_command(PathCommand::Stage, args, config, &cwd),
        Some(Command::Unstage(args)) => {
            run_path_command(PathCommand::Unstage, args, config, &cwd)
        }
        Some(Command::Revert(args)) => run_path_command(PathCommand::Revert, args, config, &cwd),
        Some(Command::Commit(args)) => run_commit_command(args, config, &cwd),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("stagehand.toml");
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix("STAGEHAND")
}

fn load_config(global: &GlobalOptions) -> stagehand_rs::error::Result<Config> {
    global
        .to_config_overrides()
        .iter()
        .try_fold(build_config_loader(global), |loader, assignment| {
            loader.set_assignment(assignment)
        })?
        .build()
}
