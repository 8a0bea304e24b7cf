// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv parsing.
//!
//! # Architecture
//!
//! ```text
//! lines --> scanner::consume_statements
//!              |                |
//!          Statement        ParseError
//!              v                v
//!        StatementConsumer (MapConsumer | Vec<Result<..>>)
//!              |
//!              v
//!          Variables (BTreeMap<String, String>)
//! ```
//!
//! # Format
//!
//! ```text
//! # whole line comment
//! NAME=   Hassan  # trailing comment, value is trimmed
//! DESCRIPTION="
//! quoted values may span lines, \" and \\ are escapes
//! "  anything after the closing quote is a comment
//! EMPTY=
//! ```
//!
//! `${NAME}` references are left untouched here; see [`crate::expand`].

pub mod consumer;
pub(crate) mod escape;
pub mod scanner;
pub mod types;


pub use consumer::{DotenvOptions, ErrorPolicy, MapConsumer, STRICT_NAME_PATTERN, StatementConsumer};
pub use scanner::consume_statements;
pub use types::{ParseError, ParseErrorKind, Statement, Variables};

/// Parses dotenv `content` into a flat mapping.
#[must_use]
pub fn parse_str(content: &str, options: &DotenvOptions) -> Variables {
    parse_lines(content.lines(), options)
}

/// Parses an already split sequence of lines into a flat mapping.
pub fn parse_lines<I, S>(lines: I, options: &DotenvOptions) -> Variables
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut consumer = MapConsumer::new(options);
    consume_statements(lines, &mut consumer);
    consumer.into_variables()
}

/// Scans `content` and returns every statement and error in input order.
#[must_use]
pub fn parse_statements(content: &str) -> Vec<Result<Statement, ParseError>> {
    let mut out = Vec::new();
    consume_statements(content.lines(), &mut out);
    out
}
