// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for the `enver` binary using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! enver [global options] <command>
//! version
//! show [--json] [--raw]
//! get NAME [--raw]
//! check [--strict]
//! files
//! options
//! ```

pub mod args;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::args::{CheckArgs, GetArgs, ShowArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Reactive environment store and dotenv tool.
#[derive(Debug, Parser)]
#[command(
    name = "enver",
    author,
    version,
    about = "Dotenv loader with ${name} expansion",
    long_about = "enver-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads dotenv files, merges them in order and expands ${name}\n\
                  references. `enver show` prints the result, `enver check`\n\
                  reports malformed statements.",
    after_help = "CONFIG FILES:\n\n\
                  By default, enver reads `enver.toml` from the current directory\n\
                  if it exists. Additional files can be given with --config, those\n\
                  are loaded after it. ENVER_<SECTION>__<KEY> environment variables\n\
                  override both, and --set overrides everything. Use\n\
                  --no-default-config to skip `enver.toml`."
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

    /// Prints the merged variables.
    Show(ShowArgs),

    /// Prints the value of one variable.
    Get(GetArgs),

    /// Reports malformed statements in every dotenv file.
    Check(CheckArgs),

    /// Lists the configuration and dotenv files used by enver.
    Files,

    /// Lists all options and their values.
    Options,
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
