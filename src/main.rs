// subsync: Git submodule synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Sync | List | Options | Version
//! ```

use std::path::Path;
use std::process::ExitCode;

use subsync::cli::{self, Command};
use subsync::cmd::config::run_options_command;
use subsync::cmd::list::run_list_command;
use subsync::cmd::sync::run_sync_command;
use subsync::config::loader::ConfigLoader;
use subsync::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use subsync::error::{Result, bail_out};
use subsync::git::discovery::locate_worktree;
use subsync::logging::{LogConfig, LogGuard, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let dir = cli.global.start_dir();
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            let (config, _log_guard) = load_config(cli, &dir)?;
            run_options_command(&config);
            Ok(())
        }
        Some(Command::Sync(args)) => {
            let (config, _log_guard) = load_config(cli, &dir)?;
            run_sync_command(args, &config, &dir)
        }
        Some(Command::List(args)) => {
            let (config, _log_guard) = load_config(cli, &dir)?;
            run_list_command(args, &config, &dir)
        }
        None => Err(bail_out("no command specified, use --help for usage information").into()),
    }
}

/// Load the layered configuration, then start logging from its `[global]` section.
fn load_config(cli: &cli::Cli, dir: &Path) -> Result<(Config, LogGuard)> {
    let (loader, files) = build_config_loader(cli, dir)?;
    let config = loader.build()?;
    let log_guard = init_logging(&build_log_config(&config))?;
    for line in &files {
        debug!(source = %line, "configuration loaded");
    }
    Ok((config, log_guard))
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

/// Layer config sources low to high; returns the loader and its file listing.
fn build_config_loader(cli: &cli::Cli, dir: &Path) -> Result<(ConfigLoader, Vec<String>)> {
    // subsync.toml lives at the work-tree root; outside a repo, fall back to DIR
    let base = locate_worktree(dir).unwrap_or_else(|_| dir.to_path_buf());

    let mut loader = ConfigLoader::new().add_toml_file_optional(base.join(CONFIG_FILE_NAME));
    for path in &cli.global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    let mut overrides = cli.global.to_config_overrides();
    if let Some(Command::Sync(args)) = &cli.command {
        overrides.extend(args.to_config_overrides());
    }
    for assignment in &overrides {
        loader = loader.set_assignment(assignment)?;
    }

    let files = loader.format_loaded_files();
    Ok((loader, files))
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
