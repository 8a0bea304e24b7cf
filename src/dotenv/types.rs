// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types produced by the dotenv scanner.
//!
//! ```text
//! Statement   line_number + raw line + name + unescaped value
//! ParseError  kind + line_number + raw line + name + partial value + origin
//! Variables   BTreeMap<String, String> for deterministic order
//! ```

use std::collections::BTreeMap;
use thiserror::Error;

/// A flat name-to-value mapping.
pub type Variables = BTreeMap<String, String>;

/// One parsed `name=value` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based number of the line the statement starts on.
    pub line_number: usize,
    /// The raw first line of the statement.
    pub line: String,
    /// Trimmed, non-empty variable name.
    pub name: String,
    /// Final value (unescaped, possibly spanning several lines).
    pub value: String,
}

/// Kind of malformed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A non-blank, non-comment line has no `=`.
    MissingAssignmentOperator,
    /// A quoted value never found its closing quote.
    MissingClosingQuote,
    /// The name is empty or does not match the configured pattern.
    IllegalName,
    /// The value does not match the configured pattern.
    IllegalValue,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAssignmentOperator => "missing assignment operator",
            Self::MissingClosingQuote => "missing closing quote",
            Self::IllegalName => "illegal name",
            Self::IllegalValue => "illegal value",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A malformed statement together with whatever could be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} for '{name}' at {}:{line_number}", .origin.as_deref().unwrap_or("<unknown>"))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based number of the line the statement starts on.
    pub line_number: usize,
    /// The raw first line of the statement.
    pub line: String,
    pub name: String,
    /// Partially recovered value, empty when nothing was recovered.
    pub value: String,
    /// Where the text came from (file name or label), if known.
    pub origin: Option<String>,
}

impl ParseError {
    pub(crate) fn new(
        kind: ParseErrorKind,
        line_number: usize,
        line: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            line_number,
            line: line.into(),
            name: name.into(),
            value: value.into(),
            origin: None,
        }
    }

    /// Attaches an origin label unless one is already set.
    #[must_use]
    pub fn with_origin(mut self, origin: Option<&str>) -> Self {
        if self.origin.is_none() {
            self.origin = origin.map(str::to_owned);
        }
        self
    }
}
