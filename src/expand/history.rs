// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-name value history across sources.
//!
//! ```text
//! sources:  [ {A: "1"}, {A: "2", B: "x"}, {A: "3"} ]
//! history:  A -> ["3", "2", "1"]    (depth 0 = last source)
//!           B -> ["x"]
//! ```

use std::collections::BTreeMap;

use crate::dotenv::Variables;

/// Values of every name, newest source first.
#[derive(Debug, Clone, Default)]
pub struct History<'a> {
    entries: BTreeMap<&'a str, Vec<&'a str>>,
}

impl<'a> History<'a> {
    /// Indexes `sources` given in registration order.
    #[must_use]
    pub fn new(sources: &'a [Variables]) -> Self {
        let mut entries: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for source in sources.iter().rev() {
            for (name, value) in source {
                entries.entry(name.as_str()).or_default().push(value.as_str());
            }
        }

        Self { entries }
    }

    /// The value of `name` contributed `depth` sources below the newest.
    #[must_use]
    pub fn get(&self, name: &str, depth: usize) -> Option<&'a str> {
        self.entries.get(name)?.get(depth).copied()
    }

    /// All indexed names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of sources defining `name`.
    #[cfg(test)]
    pub(crate) fn depth_of(&self, name: &str) -> usize {
        self.entries.get(name).map_or(0, Vec::len)
    }
}
