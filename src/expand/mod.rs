// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source merging with `${name}` expansion.
//!
//! # Resolution
//!
//! ```text
//! lookup(name, visited, depth)
//!   history[name][depth] missing ---------------> ""
//!   for each outermost unescaped ${T}:
//!     T == name -----------> lookup(name, visited, depth + 1)
//!     T in visited --------> "" + warning (cycle)
//!     otherwise -----------> lookup(T, visited + [name], 0)
//! ```
//!
//! `visited` grows on every step to another name and `depth` grows on every
//! self reference, so resolution always terminates.
//!
//! # Example
//!
//! ```
//! use enver_rs::dotenv::Variables;
//! use enver_rs::expand::expand_sources;
//!
//! let foo = Variables::from([("A".to_string(), "1,${A}".to_string())]);
//! let bar = Variables::from([("A".to_string(), "2,${A}".to_string())]);
//!
//! // The last source wins and `${A}` inside it refers to the previous one.
//! let env = expand_sources(&[foo, bar]);
//! assert_eq!(env["A"], "2,1,");
//! ```

pub(crate) mod enclosure;
pub mod history;


pub use history::History;

use crate::dotenv::Variables;
use enclosure::outermost_spans;

/// Merges `sources` (later ones override earlier ones) and expands every
/// `${name}` reference.
#[must_use]
pub fn expand_sources(sources: &[Variables]) -> Variables {
    Expander::new(sources).expand_all()
}

/// Resolves references against the histories of a fixed set of sources.
#[derive(Debug, Clone)]
pub struct Expander<'a> {
    history: History<'a>,
}

impl<'a> Expander<'a> {
    #[must_use]
    pub fn new(sources: &'a [Variables]) -> Self {
        Self {
            history: History::new(sources),
        }
    }

    /// Fully expanded value of `name`, `""` if no source defines it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> String {
        let mut visited = Vec::new();
        self.resolve(name, &mut visited, 0)
    }

    /// Expands every name of every source.
    #[must_use]
    pub fn expand_all(&self) -> Variables {
        self.history
            .names()
            .map(|name| (name.to_owned(), self.lookup(name)))
            .collect()
    }

    fn resolve<'v>(&self, name: &'v str, visited: &mut Vec<&'v str>, depth: usize) -> String
    where
        'a: 'v,
    {
        let Some(value) = self.history.get(name, depth) else {
            return String::new();
        };

        let spans = outermost_spans(value);
        if spans.is_empty() {
            return value.to_owned();
        }

        let mut out = String::with_capacity(value.len());
        let mut last = 0;

        for span in spans {
            let target = span.target(value);

            let replacement = if target == name {
                self.resolve(name, visited, depth + 1)
            } else if visited.contains(&target) {
                tracing::warn!(
                    variable = %name,
                    reference = %target,
                    "recursive environment lookup: '{target}' at '{name}' was replaced with an empty string"
                );
                String::new()
            } else {
                visited.push(name);
                let resolved = self.resolve(target, visited, 0);
                visited.pop();
                resolved
            };

            out.push_str(&value[last..span.start]);
            out.push_str(&replacement);
            last = span.end + 1;
        }

        out.push_str(&value[last..]);
        out
    }
}
