// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Show | Get | Check | Files | Options
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use enver_rs::cli::{self, Command};
use enver_rs::cmd::check::run_check_command;
use enver_rs::cmd::config::{run_files_command, run_options_command};
use enver_rs::cmd::show::{run_get_command, run_show_command};
use enver_rs::config::Config;
use enver_rs::error::EnverError;
use enver_rs::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (config_files, config) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Show(args)) => run_show_command(args, config, &mut out),
        Some(Command::Get(args)) => run_get_command(args, config, &mut out),
        Some(Command::Check(args)) => run_check_command(args, config, &mut out),
        Some(Command::Files) => run_files_command(config_files, config, &mut out),
        Some(Command::Options) => run_options_command(config, &mut out),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(EnverError::Other("No command specified".into()))
        }
    };

    let flushed = out.flush().map_err(EnverError::from);

    match result.and(flushed) {
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

/// Loads the configuration and remembers which files it came from.
fn load_config(
    global: &cli::global::GlobalOptions,
) -> enver_rs::error::Result<(Vec<String>, Config)> {
    let loader = global.config_loader()?;
    let files = loader.format_loaded_files();
    Ok((files, loader.build()?))
}
