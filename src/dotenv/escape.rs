// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backslash-escape helpers.
//!
//! ```text
//! a\\"b   '"' at 3 has 2 backslashes before it  -> unescaped
//! a\"b    '"' at 2 has 1 backslash before it    -> escaped
//! ```
//!
//! Every delimiter handled here is ASCII, so byte offsets are always valid
//! `char` boundaries.

const BACKSLASH: u8 = b'\\';

/// Number of consecutive backslashes ending right before byte `index`.
pub(crate) fn count_backslashes_before(text: &str, index: usize) -> usize {
    text.as_bytes()[..index]
        .iter()
        .rev()
        .take_while(|&&b| b == BACKSLASH)
        .count()
}

/// Byte offset of the first occurrence of `needle` at or after `start`
/// that is not escaped by an odd run of backslashes.
pub(crate) fn find_unescaped(text: &str, needle: char, start: usize) -> Option<usize> {
    let mut cursor = start;

    while let Some(found) = text.get(cursor..)?.find(needle) {
        let index = cursor + found;

        if count_backslashes_before(text, index) % 2 == 0 {
            return Some(index);
        }

        cursor = index + needle.len_utf8();
    }

    None
}

/// Byte offsets of every unescaped occurrence of `needle`, in order.
pub(crate) fn unescaped_offsets<'a>(text: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(needle)
        .map(|(index, _)| index)
        .filter(move |&index| count_backslashes_before(text, index) % 2 == 0)
}

/// Removes the backslashes that escape `quote` or another backslash.
///
/// A backslash before any other character is kept together with that
/// character. Escape positions are collected in one pass over the raw text
/// and the output is built by skipping exactly those bytes.
pub(crate) fn unescape(text: &str, quote: char) -> std::borrow::Cow<'_, str> {
    let mut escapes = Vec::new();
    let mut escaping = false;

    for (index, c) in text.char_indices() {
        if escaping {
            escaping = false;
            if c == quote || c == '\\' {
                escapes.push(index - 1);
            }
            continue;
        }

        if c == '\\' {
            escaping = true;
        }
    }

    if escapes.is_empty() {
        return std::borrow::Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() - escapes.len());
    let mut last = 0;

    for escape in escapes {
        out.push_str(&text[last..escape]);
        last = escape + 1;
    }

    out.push_str(&text[last..]);
    std::borrow::Cow::Owned(out)
}
