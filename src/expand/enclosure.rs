// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `${...}` span matching.
//!
//! ```text
//! openers (unescaped "${") ---+
//!                             +--> merged by offset --> LIFO stack
//! closers (unescaped "}")  ---+        open: push
//!                                      close: pop -> span (or literal
//!                                             text when the stack is empty)
//!
//! a${B${C}}d${E}    matched: ${C} ${B${C}} ${E}
//!                   outermost: ${B${C}} ${E}
//! ```

use crate::dotenv::escape::unescaped_offsets;

/// A matched reference: `start` is the offset of `$`, `end` the offset of
/// the closing `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    /// The text between `${` and `}`, trimmed.
    pub(crate) fn target<'a>(&self, text: &'a str) -> &'a str {
        text[self.start + 2..self.end].trim()
    }
}

/// Every matched `${...}` span of `text`, innermost first.
pub(crate) fn matched_spans(text: &str) -> Vec<Span> {
    let mut opens = unescaped_offsets(text, "${").peekable();
    let mut closes = unescaped_offsets(text, "}").peekable();
    let mut stack = Vec::new();
    let mut spans = Vec::new();

    loop {
        let next_open = opens.peek().copied();
        let next_close = closes.peek().copied();

        match (next_open, next_close) {
            (Some(open), Some(close)) if open < close => {
                stack.push(open);
                opens.next();
            }
            (_, Some(close)) => {
                if let Some(open) = stack.pop() {
                    spans.push(Span { start: open, end: close });
                }
                closes.next();
            }
            // Openers left without a closer stay literal text.
            (_, None) => break,
        }
    }

    spans
}

/// Matched spans not contained in any other span, in text order.
pub(crate) fn outermost_spans(text: &str) -> Vec<Span> {
    let mut spans = matched_spans(text);
    spans.sort_by_key(|span| span.start);

    let mut outer: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if outer.last().is_some_and(|last| span.end < last.end) {
            continue;
        }
        outer.push(span);
    }

    outer
}
