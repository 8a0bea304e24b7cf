// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-command arguments.

use clap::Args;

/// Arguments for `enver show`.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Prints a JSON object instead of dotenv lines.
    #[arg(long)]
    pub json: bool,

    /// Leaves `${name}` references unexpanded.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `enver get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable to print.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Leaves `${name}` references unexpanded.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `enver check`.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Also rejects names that are not portable identifiers.
    #[arg(long)]
    pub strict: bool,
}
