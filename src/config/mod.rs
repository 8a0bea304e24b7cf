// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration of the `enver` binary.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. enver.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVER_* env vars
//! 5. CLI overrides (--set, --file, --system, --log-level, --log-file)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVER_GLOBAL__LOG_LEVEL=4          → global.log_level = 4
//! ENVER_DOTENV__STRICT=true          → dotenv.strict = true
//! ENVER_DOTENV__FILES=.env,.env.local → dotenv.files = [".env", ".env.local"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::dotenv::{DotenvOptions, ErrorPolicy, ParseErrorKind};
use crate::error::{ConfigError, Result};
use crate::loader::{EnvLoader, FileSource};
use crate::logging::LogConfig;

use loader::ConfigLoader;
pub use types::{DEFAULT_CONFIG_FILE, DEFAULT_DOTENV_FILE, DotenvConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Dotenv sources.
    pub dotenv: DotenvConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use enver_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("enver.toml")
    ///     .with_env_prefix("ENVER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values serde cannot.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] if files are required but none are listed.
    /// - [`ConfigError::InvalidValue`] for a blank file name.
    pub fn validate(&self) -> Result<()> {
        if self.dotenv.required && self.dotenv.files.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "dotenv".to_string(),
                key: "files".to_string(),
            }
            .into());
        }

        if self.dotenv.files.iter().any(|file| file.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                section: "dotenv".to_string(),
                key: "files".to_string(),
                message: "file names must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Parser options for every dotenv source.
    ///
    /// `keep_incomplete` keeps statements cut short (no `=`, no closing
    /// quote); names or values rejected by `strict` are always dropped.
    #[must_use]
    pub fn dotenv_options(&self) -> DotenvOptions {
        let policy = if self.dotenv.keep_incomplete {
            ErrorPolicy::custom(|error| {
                matches!(
                    error.kind,
                    ParseErrorKind::MissingAssignmentOperator | ParseErrorKind::MissingClosingQuote
                )
            })
        } else {
            ErrorPolicy::Drop
        };

        let options = DotenvOptions::default().policy(policy);
        if self.dotenv.strict {
            options.strict_names()
        } else {
            options
        }
    }

    /// The configured dotenv sources in override order.
    #[must_use]
    pub fn file_sources(&self) -> Vec<FileSource> {
        self.dotenv
            .files
            .iter()
            .map(|file| {
                FileSource::builder()
                    .path(file)
                    .with_required(self.dotenv.required)
                    .with_encoding(self.dotenv.encoding)
                    .build()
            })
            .collect()
    }

    /// Loader for the configured sources: the process environment first
    /// (if enabled), then every file.
    #[must_use]
    pub fn loader(&self) -> EnvLoader {
        let mut loader = EnvLoader::new()
            .with_options(self.dotenv_options())
            .with_expand(self.dotenv.expand);

        if self.dotenv.include_system {
            loader = loader.add_system();
        }

        self.file_sources()
            .into_iter()
            .fold(loader, EnvLoader::add_file_source)
    }

    /// Logging setup for the console level and optional log file.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.log_level)
            .maybe_with_log_file(self.global.log_file.clone())
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_dotenv_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.clone());
        }
    }

    fn format_dotenv_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("dotenv.files".into(), self.dotenv.files.join(", "));
        options.insert("dotenv.required".into(), self.dotenv.required.to_string());
        options.insert(
            "dotenv.keep_incomplete".into(),
            self.dotenv.keep_incomplete.to_string(),
        );
        options.insert("dotenv.strict".into(), self.dotenv.strict.to_string());
        options.insert(
            "dotenv.include_system".into(),
            self.dotenv.include_system.to_string(),
        );
        options.insert("dotenv.expand".into(), self.dotenv.expand.to_string());
        options.insert("dotenv.encoding".into(), self.dotenv.encoding.to_string());
    }
}
