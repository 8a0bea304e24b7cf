// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv files on disk.
//!
//! ```text
//! open --> BufReader --> peek BOM
//!                          |
//!        UTF-8 (BOM or configured) --> skip BOM, stream lines
//!        UTF-16 BOM / legacy code page --> read all, encoding_rs decode
//!                          |
//!                          v
//!              consume_statements(lines, consumer)
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use bon::Builder;

use crate::dotenv::{StatementConsumer, consume_statements};
use crate::error::LoadError;
use crate::utility::encoding::{self, Encoding};

/// A dotenv file and how to read it.
///
/// # Example
///
/// ```
/// use enver_rs::loader::FileSource;
/// use enver_rs::utility::encoding::Encoding;
///
/// let source = FileSource::builder()
///     .path("legacy.env")
///     .with_required(false)
///     .with_encoding(Encoding::Windows1252)
///     .build();
///
/// assert!(!source.required());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct FileSource {
    #[builder(into)]
    path: PathBuf,
    /// A missing required file is an error, a missing optional one is skipped.
    #[builder(setters(name = with_required), default = true)]
    required: bool,
    /// Encoding of BOM-less content.
    #[builder(setters(name = with_encoding), default)]
    encoding: Encoding,
}

impl FileSource {
    /// A required UTF-8 file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::builder().path(path).build()
    }

    /// An optional UTF-8 file.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self::builder().path(path).with_required(false).build()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Label used as the origin of parse errors.
    #[must_use]
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }

    /// Opens the file, `Ok(None)` if it does not exist.
    fn open(&self) -> Result<Option<File>, LoadError> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.read_error(source)),
        }
    }

    fn read_error(&self, source: io::Error) -> LoadError {
        LoadError::Read {
            path: self.label(),
            source,
        }
    }

    fn encoding_error(&self, encoding: Encoding) -> LoadError {
        LoadError::InvalidEncoding {
            path: self.label(),
            encoding: encoding.label().to_string(),
        }
    }

    /// Feeds every line of the file to `consumer`.
    ///
    /// Returns `Ok(false)` if the file is optional and does not exist.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if the file is required and missing.
    /// - [`LoadError::Read`] on I/O failure.
    /// - [`LoadError::InvalidEncoding`] if the content does not decode.
    pub fn consume<C>(&self, consumer: &mut C) -> Result<bool, LoadError>
    where
        C: StatementConsumer + ?Sized,
    {
        let Some(file) = self.open()? else {
            if self.required {
                return Err(LoadError::NotFound { path: self.label() });
            }
            tracing::debug!(path = %self.path.display(), "skipping missing optional dotenv file");
            return Ok(false);
        };

        let mut reader = BufReader::new(file);
        let head = reader.fill_buf().map_err(|e| self.read_error(e))?;
        let (encoding, bom_len) =
            encoding::sniff_bom(head).unwrap_or((self.encoding, 0));
        reader.consume(bom_len);

        if encoding.is_utf8() {
            self.stream_utf8(reader, consumer)?;
        } else {
            let mut bytes = Vec::new();
            reader
                .read_to_end(&mut bytes)
                .map_err(|e| self.read_error(e))?;
            let text = encoding::decode(&bytes, encoding)
                .ok_or_else(|| self.encoding_error(encoding))?;
            consume_statements(text.lines(), consumer);
        }

        tracing::debug!(path = %self.path.display(), %encoding, "loaded dotenv file");
        Ok(true)
    }

    fn stream_utf8<R, C>(&self, reader: R, consumer: &mut C) -> Result<(), LoadError>
    where
        R: BufRead,
        C: StatementConsumer + ?Sized,
    {
        let mut lines = Lines {
            inner: reader.lines(),
            error: None,
        };
        consume_statements(&mut lines, consumer);

        match lines.error {
            None => Ok(()),
            Some(e) if e.kind() == io::ErrorKind::InvalidData => {
                Err(self.encoding_error(Encoding::Utf8))
            }
            Some(e) => Err(self.read_error(e)),
        }
    }
}

/// Line iterator that stops at the first I/O error and keeps it.
struct Lines<R> {
    inner: io::Lines<R>,
    error: Option<io::Error>,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        match self.inner.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
