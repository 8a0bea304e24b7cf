// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `check` command: reports every malformed statement instead of logging it.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::dotenv::{DotenvOptions, ParseError, Statement, StatementConsumer};
use crate::error::{EnverResult, bail_out};

/// Statements and errors found in one file.
#[derive(Debug)]
pub struct CheckReport<'a> {
    options: &'a DotenvOptions,
    statements: usize,
    errors: Vec<ParseError>,
}

impl<'a> CheckReport<'a> {
    #[must_use]
    pub const fn new(options: &'a DotenvOptions) -> Self {
        Self {
            options,
            statements: 0,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub const fn statements(&self) -> usize {
        self.statements
    }

    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

impl StatementConsumer for CheckReport<'_> {
    fn on_statement(&mut self, statement: Statement) {
        match self.options.validate(&statement) {
            Some(kind) => {
                let Statement {
                    line_number,
                    line,
                    name,
                    value,
                } = statement;
                self.on_error(ParseError::new(kind, line_number, line, name, value));
            }
            None => self.statements += 1,
        }
    }

    fn on_error(&mut self, error: ParseError) {
        self.errors
            .push(error.with_origin(self.options.origin_label()));
    }
}

/// Formats one error as `origin:line: kind: raw line`.
#[must_use]
pub fn format_check_error(error: &ParseError) -> String {
    format!(
        "{}:{}: {}: {}",
        error.origin.as_deref().unwrap_or("<unknown>"),
        error.line_number,
        error.kind,
        error.line.trim()
    )
}

/// Scans every configured dotenv file and prints what is malformed.
///
/// Missing optional files are skipped; a file that cannot be read is
/// reported and counted as a failure.
///
/// # Errors
///
/// Returns an error if any statement is malformed, any file cannot be read,
/// or the output cannot be written.
pub fn run_check_command(args: &CheckArgs, config: &Config, out: &mut impl Write) -> EnverResult<()> {
    let base = config.dotenv_options();
    let base = if args.strict { base.strict_names() } else { base };

    let mut statements = 0;
    let mut failures = 0;
    let mut files = 0;

    for source in config.file_sources() {
        let options = base.clone().origin(source.label());
        let mut report = CheckReport::new(&options);

        match source.consume(&mut report) {
            Ok(false) => continue,
            Ok(true) => files += 1,
            Err(e) => {
                writeln!(out, "{}: {e}", source.label())?;
                failures += 1;
                continue;
            }
        }

        for error in report.errors() {
            writeln!(out, "{}", format_check_error(error))?;
        }
        statements += report.statements();
        failures += report.errors().len();
    }

    writeln!(
        out,
        "{statements} statement(s), {failures} problem(s) in {files} file(s)"
    )?;

    if failures > 0 {
        return Err(bail_out(format!("{failures} problem(s) found")));
    }
    Ok(())
}
