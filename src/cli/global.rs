// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --file FILE       ← Dotenv files, replace dotenv.files (can repeat)
//! --system          ← dotenv.include_system = true
//! --log-level N     ← Console verbosity (0-5)
//! --log-file FILE   ← global.log_file
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > ENVER_* > --config > enver.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{ConfigError, Result};

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENVER";

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `enver.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Dotenv file(s) to read, in override order. Replaces `dotenv.files`.
    #[arg(short = 'f', long = "file", value_name = "FILE", action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Reads the process environment below every dotenv file.
    #[arg(long)]
    pub system: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'dotenv.strict=true' or 'dotenv/files=a.env,b.env'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if self.system {
            overrides.push("dotenv.include_system=true".to_string());
        }

        overrides
    }

    /// Configuration sources implied by these options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for a missing `--config` file and any
    /// error of [`ConfigLoader::apply_overrides`].
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new();

        if !self.no_default_config {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }

        for path in &self.configs {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()).into());
            }
            loader = loader.add_toml_file(path);
        }

        loader = loader
            .with_env_prefix(ENV_PREFIX)
            .apply_overrides(&self.to_config_overrides())?;

        if !self.files.is_empty() {
            let files: Vec<String> = self
                .files
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            loader = loader.set("dotenv.files", files)?;
        }

        Ok(loader)
    }

    /// Loads the effective configuration.
    ///
    /// # Errors
    ///
    /// See [`GlobalOptions::config_loader`] and [`ConfigLoader::build`].
    pub fn load_config(&self) -> Result<Config> {
        self.config_loader()?.build()
    }
}
