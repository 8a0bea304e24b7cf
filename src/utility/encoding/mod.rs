// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv file encodings.
//!
//! ```text
//! leading bytes    EF BB BF -> UTF-8     (BOM skipped, lines streamed)
//!                  FF FE    -> UTF-16 LE (whole file decoded)
//!                  FE FF    -> UTF-16 BE (whole file decoded)
//!                  none     -> configured encoding (UTF-8 by default)
//! ```
//!
//! Uses `encoding_rs`. Malformed input is an error, never U+FFFD.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};

/// Text encoding of a dotenv source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
    #[serde(rename = "utf-16be", alias = "utf16be")]
    Utf16Be,
    /// Windows-1252, the usual legacy code page of Western Windows editors.
    #[serde(rename = "windows-1252", alias = "cp1252")]
    Windows1252,
}

impl Encoding {
    /// Human readable label, as used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Windows1252 => "windows-1252",
        }
    }

    /// True if lines can be streamed straight through a UTF-8 reader.
    #[must_use]
    pub const fn is_utf8(self) -> bool {
        matches!(self, Self::Utf8)
    }

    fn codec(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Utf16Le => UTF_16LE,
            Self::Utf16Be => UTF_16BE,
            Self::Windows1252 => WINDOWS_1252,
        }
    }

    fn from_codec(codec: &'static encoding_rs::Encoding) -> Option<Self> {
        [Self::Utf8, Self::Utf16Le, Self::Utf16Be, Self::Windows1252]
            .into_iter()
            .find(|encoding| encoding.codec() == codec)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = String;

    /// Accepts WHATWG labels (`utf-8`, `utf-16le`, `latin1`, `cp1252`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encoding_rs::Encoding::for_label(s.trim().as_bytes())
            .and_then(Self::from_codec)
            .ok_or_else(|| format!("unsupported encoding '{s}'"))
    }
}

/// Detects a byte order mark at the start of `bytes`.
///
/// Returns the encoding it announces and its length in bytes.
#[must_use]
pub fn sniff_bom(bytes: &[u8]) -> Option<(Encoding, usize)> {
    let (codec, len) = encoding_rs::Encoding::for_bom(bytes)?;
    Encoding::from_codec(codec).map(|encoding| (encoding, len))
}

/// Decodes a whole buffer, honoring a BOM over `fallback`.
///
/// Returns `None` if the content is malformed in the chosen encoding.
///
/// # Example
/// ```
/// use enver_rs::utility::encoding::{Encoding, decode};
///
/// let text = decode(b"NAME=caf\xe9", Encoding::Windows1252).unwrap();
/// assert_eq!(text, "NAME=café");
/// ```
#[must_use]
pub fn decode(bytes: &[u8], fallback: Encoding) -> Option<Cow<'_, str>> {
    let (encoding, body) = match sniff_bom(bytes) {
        Some((encoding, len)) => (encoding, &bytes[len..]),
        None => (fallback, bytes),
    };

    encoding
        .codec()
        .decode_without_bom_handling_and_without_replacement(body)
}

#[cfg(test)]
mod tests;
