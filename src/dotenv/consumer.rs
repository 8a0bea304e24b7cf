// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statement consumers and the recoverable-error policy.
//!
//! ```text
//! scanner --Statement--> MapConsumer --name/value patterns?--> Variables
//!         --ParseError-> MapConsumer --ErrorPolicy::should_keep--+
//!                                       true:  name = partial    |
//!                                       false: name omitted  <---+
//! ```

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use regex::Regex;

use super::types::{ParseError, ParseErrorKind, Statement, Variables};

/// Receives the output of [`consume_statements`](super::consume_statements).
pub trait StatementConsumer {
    /// Called for every well-formed statement.
    fn on_statement(&mut self, statement: Statement);

    /// Called for every malformed statement.
    fn on_error(&mut self, error: ParseError);
}

/// Keeps every statement and error, in input order.
impl StatementConsumer for Vec<Result<Statement, ParseError>> {
    fn on_statement(&mut self, statement: Statement) {
        self.push(Ok(statement));
    }

    fn on_error(&mut self, error: ParseError) {
        self.push(Err(error));
    }
}

/// Decides whether a malformed statement still contributes its partial
/// value.
#[derive(Clone, Default)]
pub enum ErrorPolicy {
    /// Log and omit the name.
    #[default]
    Drop,
    /// Log and record the partial value (`""` for a missing `=`).
    Keep,
    /// Caller-supplied predicate.
    Custom(Arc<dyn Fn(&ParseError) -> bool + Send + Sync>),
}

impl ErrorPolicy {
    /// Wraps a predicate into [`ErrorPolicy::Custom`].
    pub fn custom(predicate: impl Fn(&ParseError) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// Returns `true` if the partial statement should be recorded.
    #[must_use]
    pub fn should_keep(&self, error: &ParseError) -> bool {
        match self {
            Self::Drop => false,
            Self::Keep => true,
            Self::Custom(predicate) => predicate(error),
        }
    }
}

impl fmt::Debug for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => f.write_str("Drop"),
            Self::Keep => f.write_str("Keep"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for turning dotenv text into [`Variables`].
///
/// # Example
///
/// ```
/// use enver_rs::dotenv::{DotenvOptions, ErrorPolicy, parse_str};
///
/// let options = DotenvOptions::builder()
///     .with_policy(ErrorPolicy::Keep)
///     .with_origin(".env".to_string())
///     .build();
///
/// let vars = parse_str("NAME=Hassan\nOTHER_JOBS", &options);
/// assert_eq!(vars["OTHER_JOBS"], "");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct DotenvOptions {
    #[builder(setters(name = with_policy), default)]
    policy: ErrorPolicy,
    /// Label used in error messages (typically the file name).
    #[builder(setters(name = with_origin))]
    origin: Option<String>,
    #[builder(setters(name = with_name_pattern))]
    name_pattern: Option<Regex>,
    #[builder(setters(name = with_value_pattern))]
    value_pattern: Option<Regex>,
}

/// Portable variable names: a letter or underscore, then letters, digits,
/// underscores or dots.
pub const STRICT_NAME_PATTERN: &str = "^[A-Za-z_][A-Za-z0-9_.]*$";

impl DotenvOptions {
    /// Options that reject names outside [`STRICT_NAME_PATTERN`].
    #[must_use]
    pub fn strict() -> Self {
        Self::default().strict_names()
    }

    /// Installs [`STRICT_NAME_PATTERN`] as the name pattern.
    #[must_use]
    pub fn strict_names(mut self) -> Self {
        self.name_pattern = Regex::new(STRICT_NAME_PATTERN).ok();
        self
    }

    /// Replaces the error policy.
    #[must_use]
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the origin label.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub const fn error_policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    #[must_use]
    pub fn origin_label(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Checks a statement against the configured patterns.
    pub(crate) fn validate(&self, statement: &Statement) -> Option<ParseErrorKind> {
        self.check_patterns(&statement.name, &statement.value)
    }

    /// Re-tags an incomplete statement whose name or partial value fails a
    /// pattern, so policies see it as `IllegalName` / `IllegalValue`.
    pub(crate) fn screen(&self, mut error: ParseError) -> ParseError {
        let incomplete = matches!(
            error.kind,
            ParseErrorKind::MissingAssignmentOperator | ParseErrorKind::MissingClosingQuote
        );

        if incomplete
            && !error.name.is_empty()
            && let Some(kind) = self.check_patterns(&error.name, &error.value)
        {
            error.kind = kind;
        }
        error
    }

    fn check_patterns(&self, name: &str, value: &str) -> Option<ParseErrorKind> {
        if let Some(pattern) = &self.name_pattern
            && !pattern.is_match(name)
        {
            return Some(ParseErrorKind::IllegalName);
        }

        if let Some(pattern) = &self.value_pattern
            && !pattern.is_match(value)
        {
            return Some(ParseErrorKind::IllegalValue);
        }

        None
    }
}

/// Collects statements into a flat mapping, later statements winning.
#[derive(Debug)]
pub struct MapConsumer<'a> {
    output: Variables,
    options: &'a DotenvOptions,
}

impl<'a> MapConsumer<'a> {
    #[must_use]
    pub const fn new(options: &'a DotenvOptions) -> Self {
        Self {
            output: Variables::new(),
            options,
        }
    }

    /// Consumes the collector and returns the mapping.
    #[must_use]
    pub fn into_variables(self) -> Variables {
        self.output
    }
}

impl StatementConsumer for MapConsumer<'_> {
    fn on_statement(&mut self, statement: Statement) {
        if let Some(kind) = self.options.validate(&statement) {
            let Statement {
                line_number,
                line,
                name,
                value,
            } = statement;
            self.on_error(ParseError::new(kind, line_number, line, name, value));
            return;
        }

        self.output.insert(statement.name, statement.value);
    }

    fn on_error(&mut self, error: ParseError) {
        let error = self
            .options
            .screen(error)
            .with_origin(self.options.origin_label());

        // An empty name can never be recorded, whatever the policy says.
        if !error.name.is_empty() && self.options.error_policy().should_keep(&error) {
            tracing::debug!(kind = %error.kind, line = %error.line, "{error}; keeping partial value");
            self.output.insert(error.name, error.value);
        } else {
            tracing::warn!(kind = %error.kind, line = %error.line, "{error}; statement dropped");
        }
    }
}
