// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  log_level, log_file
//! [dotenv]  files, required, keep_incomplete, strict,
//!           include_system, expand, encoding
//! ```

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::utility::encoding::Encoding;

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "enver.toml";

/// Dotenv file read when the configuration names none.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Global options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// Optional log file receiving every event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

/// Which dotenv sources to read and how to parse them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotenvConfig {
    /// Files in override order: later files win.
    pub files: Vec<String>,
    /// Fail if a listed file does not exist.
    pub required: bool,
    /// Record the partial value of malformed statements.
    pub keep_incomplete: bool,
    /// Reject names that are not portable identifiers.
    pub strict: bool,
    /// Read the process environment below every file.
    pub include_system: bool,
    /// Expand `${name}` references.
    pub expand: bool,
    /// Encoding of files without a byte order mark.
    pub encoding: Encoding,
}

impl Default for DotenvConfig {
    fn default() -> Self {
        Self {
            files: vec![DEFAULT_DOTENV_FILE.to_string()],
            required: false,
            keep_incomplete: false,
            strict: false,
            include_system: false,
            expand: true,
            encoding: Encoding::Utf8,
        }
    }
}
