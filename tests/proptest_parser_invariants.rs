// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-based tests for the dotenv parser and `${name}` expansion.
//!
//! - Parsing arbitrary text never panics and is deterministic.
//! - Every recorded name is non-empty and trimmed.
//! - Rendering a mapping with `show`'s formatter and parsing it back is
//!   lossless.
//! - Expansion terminates on arbitrary reference graphs, cycles included.

use enver_rs::cmd::show::format_dotenv_line;
use enver_rs::dotenv::{DotenvOptions, ErrorPolicy, Variables, parse_statements, parse_str};
use enver_rs::expand::expand_sources;
use proptest::prelude::*;

/// Lines built from the characters the scanner cares about.
fn dotenv_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z_=#'\" \\\\${}\t]{0,16}", 0..12).prop_map(|lines| lines.join("\n"))
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,6}"
}

/// Values made of references to a small name pool plus literal text.
fn reference_value() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z,:/ ]{0,4}",
            prop::sample::select(vec!["${A}", "${B}", "${C}", "${${A}}", "\\${A}"]).prop_map(str::to_string),
        ],
        0..5,
    )
    .prop_map(|parts| parts.concat())
}

fn reference_source() -> impl Strategy<Value = Variables> {
    prop::collection::btree_map(
        prop::sample::select(vec!["A", "B", "C"]).prop_map(str::to_string),
        reference_value(),
        0..3,
    )
}

proptest! {
    #[test]
    fn parse_never_panics_and_is_deterministic(text in dotenv_text()) {
        let options = DotenvOptions::builder().with_policy(ErrorPolicy::Keep).build();

        let first = parse_str(&text, &options);
        let second = parse_str(&text, &options);
        prop_assert_eq!(&first, &second);

        for name in first.keys() {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name.trim(), name.as_str());
        }
    }

    #[test]
    fn statement_line_numbers_are_ordered(text in dotenv_text()) {
        let line_count = text.lines().count();
        let numbers: Vec<usize> = parse_statements(&text)
            .iter()
            .map(|item| match item {
                Ok(statement) => statement.line_number,
                Err(error) => error.line_number,
            })
            .collect();

        prop_assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(numbers.iter().all(|&n| n >= 1 && n <= line_count));
    }

    #[test]
    fn formatted_mapping_parses_back(
        vars in prop::collection::btree_map(name(), "[ -~\r\n]{0,12}", 0..8)
    ) {
        prop_assume!(!vars.values().any(|value| value.contains("\r\n")));

        let text: Vec<String> = vars
            .iter()
            .map(|(name, value)| format_dotenv_line(name, value))
            .collect();

        let parsed = parse_str(&text.join("\n"), &DotenvOptions::default());
        prop_assert_eq!(parsed, vars);
    }

    #[test]
    fn expansion_terminates(sources in prop::collection::vec(reference_source(), 0..4)) {
        let expanded = expand_sources(&sources);

        let names: std::collections::BTreeSet<&String> =
            sources.iter().flat_map(Variables::keys).collect();
        prop_assert_eq!(expanded.len(), names.len());
    }
}
