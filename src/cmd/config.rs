// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for enver.

use std::io::Write;

use crate::config::Config;
use crate::error::EnverResult;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_options_command(config: &Config, out: &mut impl Write) -> EnverResult<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration files and the dotenv sources they select.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_files_command(
    config_files: &[String],
    config: &Config,
    out: &mut impl Write,
) -> EnverResult<()> {
    writeln!(out, "Config files:")?;
    write_list(out, config_files, "No configuration files loaded")?;

    writeln!(out, "Dotenv sources:")?;
    write_list(
        out,
        &config.loader().format_loaded_files(),
        "No dotenv sources found",
    )
}

fn write_list(out: &mut impl Write, lines: &[String], empty: &str) -> EnverResult<()> {
    if lines.is_empty() {
        writeln!(out, "  {empty}")?;
    } else {
        for line in lines {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}
