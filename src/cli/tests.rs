// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["enver", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["enver"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["enver", "show", "--json", "--raw"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r"
    Some(
        Show(
            ShowArgs {
                json: true,
                raw: true,
            },
        ),
    )
    ");
}

#[test]
fn test_parse_get() {
    let cli = Cli::try_parse_from(["enver", "get", "DATABASE_URL"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get command");
    };
    assert_eq!(args.name, "DATABASE_URL");
    assert!(!args.raw);
}

#[test]
fn test_parse_get_requires_name() {
    assert!(Cli::try_parse_from(["enver", "get"]).is_err());
}

#[test]
fn test_parse_check_strict() {
    let cli = Cli::try_parse_from(["enver", "check", "--strict"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Check(args)) if args.strict));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "enver",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-f",
        ".env",
        "-f",
        ".env.local",
        "--system",
        "-l",
        "5",
        "-s",
        "dotenv.strict=true",
        "files",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Files)));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(
        cli.global.files,
        vec![PathBuf::from(".env"), PathBuf::from(".env.local")]
    );
    assert!(cli.global.system);
    assert_eq!(cli.global.log_level, Some(5));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["enver", "-l", "6", "options"]).is_err());
}

#[test]
fn test_to_config_overrides() {
    let global = GlobalOptions {
        log_level: Some(4),
        log_file: Some(PathBuf::from("enver.log")),
        system: true,
        options: vec!["dotenv.expand=false".to_string()],
        ..GlobalOptions::default()
    };

    insta::assert_debug_snapshot!(global.to_config_overrides(), @r#"
    [
        "dotenv.expand=false",
        "global.log_level=4",
        "global.log_file=enver.log",
        "dotenv.include_system=true",
    ]
    "#);
}

#[test]
fn test_load_config_with_files_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("extra.toml");
    std::fs::write(&config_path, "[dotenv]\nstrict = true\nfiles = [\"x.env\"]\n").unwrap();

    let global = GlobalOptions {
        configs: vec![config_path],
        no_default_config: true,
        files: vec![PathBuf::from("a.env"), PathBuf::from("b.env")],
        log_level: Some(1),
        ..GlobalOptions::default()
    };
    let config = global.load_config().unwrap();

    assert!(config.dotenv.strict);
    assert_eq!(config.dotenv.files, vec!["a.env", "b.env"]);
    assert_eq!(config.global.log_level.as_u8(), 1);
}

#[test]
fn test_load_config_missing_config_file() {
    let global = GlobalOptions {
        configs: vec![PathBuf::from("definitely-missing-enver-config.toml")],
        no_default_config: true,
        ..GlobalOptions::default()
    };

    let err = global.load_config().unwrap_err();
    insta::assert_snapshot!(err, @"config file not found: definitely-missing-enver-config.toml");
}
