// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading variables from files, strings and the process environment.
//!
//! # Loader Pipeline
//!
//! ```text
//! EnvLoader::new()
//!   .add_system()            lowest priority
//!   .add_file(req)
//!   .add_file_optional(opt)
//!   .add_str()               highest priority
//!        |
//!        v
//!   load()           --> Vec<Variables>     one per source, in order
//!   load_merged()    --> Variables          later sources override
//!   load_expanded()  --> Variables          merged + ${name} expansion
//!   load_into(&Enver)                       merged into a store
//! ```
//!
//! # Example
//!
//! ```
//! use enver_rs::loader::EnvLoader;
//!
//! let vars = EnvLoader::new()
//!     .add_str("HOST=localhost\nPORT=8080")
//!     .add_str("URL=http://${HOST}:${PORT}")
//!     .load_expanded()?;
//!
//! assert_eq!(vars["URL"], "http://localhost:8080");
//! # Ok::<(), enver_rs::error::LoadError>(())
//! ```

pub mod file;

#[cfg(test)]
mod tests;

pub use file::FileSource;

use std::path::{Path, PathBuf};

use crate::dotenv::{self, DotenvOptions, MapConsumer, Variables};
use crate::error::LoadError;
use crate::expand::expand_sources;
use crate::store::Enver;

/// Parses dotenv `content`.
#[must_use]
pub fn load_str(content: &str, options: &DotenvOptions) -> Variables {
    dotenv::parse_str(content, options)
}

/// Parses the required UTF-8 dotenv file at `path`.
///
/// The file name is the origin of parse errors unless `options` names one.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file is missing, unreadable or not UTF-8.
pub fn load_file(path: impl AsRef<Path>, options: &DotenvOptions) -> Result<Variables, LoadError> {
    let source = FileSource::new(path.as_ref());
    let options = match options.origin_label() {
        Some(_) => options.clone(),
        None => options.clone().origin(source.label()),
    };

    let mut consumer = MapConsumer::new(&options);
    source.consume(&mut consumer)?;
    Ok(consumer.into_variables())
}

/// The process environment. Entries that are not valid UTF-8 are skipped.
#[must_use]
pub fn load_system() -> Variables {
    std::env::vars_os()
        .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (name, _) => {
                tracing::debug!(variable = ?name, "skipping non UTF-8 environment entry");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
enum Source {
    File(FileSource),
    Str { label: String, content: String },
    System,
}

/// Builder for loading variables from several ordered sources.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    sources: Vec<Source>,
    options: DotenvOptions,
    expand: bool,
}

impl EnvLoader {
    /// An empty loader; [`EnvLoader::load_into`] expands references.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            options: DotenvOptions::default(),
            expand: true,
        }
    }

    /// Adds a required UTF-8 dotenv file.
    ///
    /// The file is read by the `load*` methods; if it does not exist they
    /// return [`LoadError::NotFound`].
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file_source(FileSource::new(path.as_ref()))
    }

    /// Adds a UTF-8 dotenv file that is skipped if it does not exist.
    #[must_use]
    pub fn add_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file_source(FileSource::optional(path.as_ref()))
    }

    #[must_use]
    pub fn add_file_source(mut self, source: FileSource) -> Self {
        self.sources.push(Source::File(source));
        self
    }

    /// Adds in-memory dotenv text, labelled `<string>` in parse errors.
    #[must_use]
    pub fn add_str(self, content: &str) -> Self {
        self.add_str_labeled("<string>", content)
    }

    #[must_use]
    pub fn add_str_labeled(mut self, label: &str, content: &str) -> Self {
        self.sources.push(Source::Str {
            label: label.to_string(),
            content: content.to_string(),
        });
        self
    }

    /// Adds the process environment, read when loading.
    #[must_use]
    pub fn add_system(mut self) -> Self {
        self.sources.push(Source::System);
        self
    }

    /// Sets the parser options used for every text source.
    ///
    /// The origin is replaced per source by its file name or label.
    #[must_use]
    pub fn with_options(mut self, options: DotenvOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether [`EnvLoader::load_into`] expands `${name}` references.
    #[must_use]
    pub const fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &DotenvOptions {
        &self.options
    }

    #[must_use]
    pub const fn expands(&self) -> bool {
        self.expand
    }

    /// Registered file sources, in order.
    pub fn file_sources(&self) -> impl Iterator<Item = &FileSource> {
        self.sources.iter().filter_map(|source| match source {
            Source::File(file) => Some(file),
            _ => None,
        })
    }

    /// Number of registered sources.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Reads every source, in registration order.
    ///
    /// Missing optional files contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] raised by a file source.
    pub fn load(&self) -> Result<Vec<Variables>, LoadError> {
        let mut loaded = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source {
                Source::File(file) => {
                    let options = self.options.clone().origin(file.label());
                    let mut consumer = MapConsumer::new(&options);
                    if file.consume(&mut consumer)? {
                        loaded.push(consumer.into_variables());
                    }
                }
                Source::Str { label, content } => {
                    let options = self.options.clone().origin(label.as_str());
                    loaded.push(dotenv::parse_str(content, &options));
                }
                Source::System => loaded.push(load_system()),
            }
        }

        tracing::debug!(sources = loaded.len(), "loaded dotenv sources");
        Ok(loaded)
    }

    /// Reads every source and merges them, later sources winning.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load`].
    pub fn load_merged(&self) -> Result<Variables, LoadError> {
        Ok(self.load()?.into_iter().flatten().collect())
    }

    /// Reads every source, merges them and expands `${name}` references.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load`].
    pub fn load_expanded(&self) -> Result<Variables, LoadError> {
        Ok(expand_sources(&self.load()?))
    }

    /// Loads (expanded unless disabled) and merges the result into `store`.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load`]. The store is untouched on error.
    pub fn load_into(&self, store: &Enver) -> Result<(), LoadError> {
        let vars = if self.expand {
            self.load_expanded()?
        } else {
            self.load_merged()?
        };
        store.merge(vars);
        Ok(())
    }

    /// Sources that will be read: `(kind, path)`, missing optional files
    /// excluded.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.sources
            .iter()
            .filter_map(|source| match source {
                Source::File(file) if file.required() => {
                    Some(("file".to_string(), file.path().to_path_buf()))
                }
                Source::File(file) => file
                    .path()
                    .exists()
                    .then(|| ("optional".to_string(), file.path().to_path_buf())),
                Source::Str { label, .. } => Some(("string".to_string(), PathBuf::from(label))),
                Source::System => Some(("system".to_string(), PathBuf::from("<environment>"))),
            })
            .collect()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.loaded_files()
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}
