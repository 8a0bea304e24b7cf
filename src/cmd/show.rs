// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show` and `get` commands.
//!
//! ```text
//! Config::loader() --with_expand(!raw)--> load_into(Enver) --> to_map / required
//! ```

use std::io::{self, Write};

use crate::cli::args::{GetArgs, ShowArgs};
use crate::config::Config;
use crate::dotenv::Variables;
use crate::error::{EnverResult, bail_out};
use crate::store::Enver;

/// Loads every configured source into a fresh store.
fn load_store(config: &Config, raw: bool) -> EnverResult<Enver> {
    let store = Enver::new();
    config
        .loader()
        .with_expand(config.dotenv.expand && !raw)
        .load_into(&store)?;
    Ok(store)
}

/// Prints the merged variables as dotenv lines or JSON.
///
/// # Errors
///
/// Returns an error if a required dotenv file cannot be read or the output
/// cannot be written.
pub fn run_show_command(args: &ShowArgs, config: &Config, out: &mut impl Write) -> EnverResult<()> {
    let vars = load_store(config, args.raw)?.to_map();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &vars).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    write_dotenv(&vars, out)
}

/// Writes `vars` as dotenv lines, or nothing if a value ends a line with
/// CR: line splitting drops it and dotenv has no escape for it.
pub(crate) fn write_dotenv(vars: &Variables, out: &mut impl Write) -> EnverResult<()> {
    if let Some(name) = vars
        .iter()
        .find_map(|(name, value)| value.contains("\r\n").then_some(name))
    {
        return Err(bail_out(format!(
            "value of '{name}' has a CRLF line break, use --json to show it"
        )));
    }

    for (name, value) in vars {
        writeln!(out, "{}", format_dotenv_line(name, value))?;
    }
    Ok(())
}

/// Prints the value of one variable.
///
/// # Errors
///
/// Returns [`EnverError::Property`](crate::error::EnverError::Property)
/// if the variable is not set, or [`EnverError::Load`](crate::error::EnverError::Load).
pub fn run_get_command(args: &GetArgs, config: &Config, out: &mut impl Write) -> EnverResult<()> {
    let value = load_store(config, args.raw)?.required(&args.name).get()?;
    writeln!(out, "{value}")?;
    Ok(())
}

/// Renders `name=value` so that parsing the line yields `value` again.
///
/// Values that would be trimmed, cut at `#`, span lines or start with a
/// quote are double quoted with `\` and `"` escaped. A CR directly before
/// a line break does not survive parsing.
#[must_use]
pub fn format_dotenv_line(name: &str, value: &str) -> String {
    if needs_quotes(value) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{name}=\"{escaped}\"")
    } else {
        format!("{name}={value}")
    }
}

fn needs_quotes(value: &str) -> bool {
    value.trim() != value
        || value.starts_with(['"', '\''])
        || value.contains(['#', '\\', '\n', '\r'])
}
