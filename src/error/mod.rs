// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnverError (~24 bytes)         returned by cmd::run_*
//!                  |
//!   +--------+-----+-----+---------+
//!   |        |           |         |
//!   v        v           v         v
//! Bail     Load      Property   Io/Other
//! Box<str> Box       Box        Box
//!
//! Sub-errors (unboxed internally):
//!   Load      NotFound, Read, InvalidEncoding
//!   Property  Missing, Invalid
//!   Config    ParseError, MissingKey, InvalidValue, NotFound
//!             (carried by anyhow from the config layer)
//!   Parse     MissingAssignmentOperator, MissingClosingQuote,
//!             IllegalName, IllegalValue
//! ```
//!
//! Parse errors are not raised by the parser itself; they are handed to a
//! [`StatementConsumer`](crate::dotenv::StatementConsumer) and an
//! [`ErrorPolicy`](crate::dotenv::ErrorPolicy) decides what happens.

use thiserror::Error;

pub use crate::dotenv::{ParseError, ParseErrorKind};

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnverError`].
pub type EnverResult<T> = std::result::Result<T, EnverError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnverError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// A source could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] Box<LoadError>),

    /// A required or typed property could not be read.
    #[error("property error: {0}")]
    Property(#[from] Box<PropertyError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`EnverError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnverError {
    EnverError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnverError {
                fn from(err: $error) -> Self {
                    EnverError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    LoadError => Load,
    PropertyError => Property,
    std::io::Error => Io,
}

// --- Load Errors ---

/// Errors raised while reading a dotenv source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required file does not exist.
    #[error("dotenv file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read.
    #[error("failed to read dotenv file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid in the selected encoding.
    #[error("dotenv file '{path}' is not valid {encoding}")]
    InvalidEncoding { path: String, encoding: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Property Errors ---

/// Errors carried by required and typed properties.
///
/// `Clone` so it can live inside a cached property value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The variable is not set.
    #[error("environment variable '{name}' is not set")]
    Missing { name: String },

    /// The variable is set but could not be converted.
    #[error("environment variable '{name}' has invalid value '{value}': {message}")]
    Invalid {
        name: String,
        value: String,
        message: String,
    },
}
