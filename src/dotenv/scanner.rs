// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line scanner.
//!
//! ```text
//! line --blank?------------------------------> skip
//!      --split first '='--> name, rest
//!        name starts with '#' ---------------> skip (comment)
//!        name empty -------------------------> IllegalName
//!        no '=' -----------------------------> MissingAssignmentOperator
//!        rest blank -------------------------> name = ""
//!        rest starts with ' or " --> quoted --> pull lines until the
//!                                               closing quote, or
//!                                               MissingClosingQuote at EOF
//!        otherwise --> up to unescaped '#', trimmed
//! ```

use super::consumer::StatementConsumer;
use super::escape::{find_unescaped, unescape};
use super::types::{ParseError, ParseErrorKind, Statement};

/// Scans `lines` and reports every statement and malformed line to
/// `consumer`.
///
/// Only the statement being assembled is held in memory, so `lines` may be
/// streamed straight from a reader. Line numbers are 1-based.
pub fn consume_statements<I, S, C>(lines: I, consumer: &mut C)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: StatementConsumer + ?Sized,
{
    let mut lines = lines.into_iter().enumerate();

    while let Some((index, line)) = lines.next() {
        let line_number = index + 1;
        let line = line.as_ref();

        if line.trim().is_empty() {
            continue;
        }

        let (name, rest) = match line.split_once('=') {
            Some((name, rest)) => (name.trim(), Some(rest)),
            None => (line.trim(), None),
        };

        if name.starts_with('#') {
            continue;
        }

        if name.is_empty() {
            consumer.on_error(ParseError::new(
                ParseErrorKind::IllegalName,
                line_number,
                line,
                name,
                rest.unwrap_or_default(),
            ));
            continue;
        }

        let Some(rest) = rest else {
            consumer.on_error(ParseError::new(
                ParseErrorKind::MissingAssignmentOperator,
                line_number,
                line,
                name,
                "",
            ));
            continue;
        };

        if rest.trim().is_empty() {
            consumer.on_statement(statement(line_number, line, name, String::new()));
            continue;
        }

        let opening = rest.trim_start();
        let quote = match opening.chars().next() {
            Some(c @ ('\'' | '"')) => c,
            _ => {
                let value = unquoted_value(rest);
                consumer.on_statement(statement(line_number, line, name, value.to_owned()));
                continue;
            }
        };

        let first = &opening[quote.len_utf8()..];
        let mut value = String::new();

        // Each physical line is unescaped on its own so a trailing backslash
        // never escapes the first character of the next line.
        if let Some(end) = find_unescaped(first, quote, 0) {
            value.push_str(&unescape(&first[..end], quote));
            consumer.on_statement(statement(line_number, line, name, value));
            continue;
        }

        value.push_str(&unescape(first, quote));

        let mut closed = false;
        for (_, continuation) in lines.by_ref() {
            let continuation = continuation.as_ref();
            value.push('\n');

            if let Some(end) = find_unescaped(continuation, quote, 0) {
                value.push_str(&unescape(&continuation[..end], quote));
                closed = true;
                break;
            }

            value.push_str(&unescape(continuation, quote));
        }

        if closed {
            consumer.on_statement(statement(line_number, line, name, value));
        } else {
            consumer.on_error(ParseError::new(
                ParseErrorKind::MissingClosingQuote,
                line_number,
                line,
                name,
                value,
            ));
        }
    }
}

/// Value of an unquoted statement: everything before the first unescaped
/// `#`, trimmed.
fn unquoted_value(rest: &str) -> &str {
    let end = find_unescaped(rest, '#', 0).unwrap_or(rest.len());
    rest[..end].trim()
}

fn statement(line_number: usize, line: &str, name: &str, value: String) -> Statement {
    Statement {
        line_number,
        line: line.to_owned(),
        name: name.to_owned(),
        value,
    }
}
