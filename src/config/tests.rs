// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;
use std::path::Path;

use super::{Config, ConfigLoader};
use crate::dotenv::ErrorPolicy;
use crate::logging::LogLevel;
use crate::utility::encoding::Encoding;

#[test]
fn test_default_config() {
    let config = Config::default();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    dotenv.encoding        = UTF-8
    dotenv.expand          = true
    dotenv.files           = .env
    dotenv.include_system  = false
    dotenv.keep_incomplete = false
    dotenv.required        = false
    dotenv.strict          = false
    global.log_level       = 3
    ");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
log_level = 4
log_file = "logs/enver.log"

[dotenv]
files = [".env", ".env.local"]
required = true
keep_incomplete = true
strict = true
include_system = true
expand = false
encoding = "windows-1252"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file.as_deref(), Some("logs/enver.log"));
    assert_eq!(config.dotenv.files, vec![".env", ".env.local"]);
    assert!(config.dotenv.required);
    assert!(config.dotenv.keep_incomplete);
    assert!(config.dotenv.strict);
    assert!(config.dotenv.include_system);
    assert!(!config.dotenv.expand);
    assert_eq!(config.dotenv.encoding, Encoding::Windows1252);
}

#[test]
fn test_config_rejects_unknown_keys() {
    let err = Config::parse("[dotenv]\nfiless = []\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn test_config_rejects_bad_log_level() {
    assert!(Config::parse("[global]\nlog_level = 9\n").is_err());
}

#[test]
fn test_validate_required_without_files() {
    let err = Config::parse("[dotenv]\nfiles = []\nrequired = true\n").unwrap_err();

    insta::assert_snapshot!(err, @"missing required config key 'files' in section '[dotenv]'");
}

#[test]
fn test_validate_blank_file_name() {
    let err = Config::parse("[dotenv]\nfiles = [\" \"]\n").unwrap_err();

    insta::assert_snapshot!(err, @"invalid value for 'files' in section '[dotenv]': file names must not be empty");
}

#[test]
fn test_env_source_overrides_files() {
    let env = HashMap::from([
        ("ENVER_DOTENV__STRICT".to_string(), "true".to_string()),
        ("ENVER_DOTENV__FILES".to_string(), "a.env,b.env".to_string()),
        ("ENVER_GLOBAL__LOG_LEVEL".to_string(), "1".to_string()),
    ]);

    let config = ConfigLoader::new()
        .add_toml_str("[dotenv]\nstrict = false\n")
        .with_env_prefix("ENVER")
        .with_env_source(env)
        .build()
        .unwrap();

    assert!(config.dotenv.strict);
    assert_eq!(config.dotenv.files, vec!["a.env", "b.env"]);
    assert_eq!(config.global.log_level, LogLevel::ERROR);
}

#[test]
fn test_apply_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[dotenv]\nexpand = true\n")
        .apply_overrides(&[
            "dotenv.expand=false",
            "global/log_level=5",
            "dotenv.files = x.env, y.env",
        ])
        .unwrap()
        .build()
        .unwrap();

    assert!(!config.dotenv.expand);
    assert_eq!(config.global.log_level, LogLevel::TRACE);
    assert_eq!(config.dotenv.files, vec!["x.env", "y.env"]);
}

#[test]
fn test_apply_overrides_requires_assignment() {
    let err = ConfigLoader::new()
        .apply_overrides(&["dotenv.strict"])
        .err()
        .unwrap();

    insta::assert_snapshot!(err, @"invalid value for 'dotenv.strict' in section '[cli]': expected KEY=VALUE");
}

#[test]
fn test_dotenv_options() {
    let config = Config::parse("[dotenv]\nkeep_incomplete = true\nstrict = true\n").unwrap();
    let options = config.dotenv_options();

    assert!(matches!(options.error_policy(), ErrorPolicy::Custom(_)));
    let vars = crate::dotenv::parse_str("1BAD=x\nFLAG\nGOOD=1", &options);
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["FLAG"], "");
    assert_eq!(vars["GOOD"], "1");
}

#[test]
fn test_strict_drops_incomplete_illegal_names() {
    let config = Config::parse("[dotenv]\nstrict = true\nkeep_incomplete = true\n").unwrap();
    let env = crate::dotenv::parse_str(
        "1BAD\nFLAG\n2BAD=\"open\nGOOD=1\n3BAD=x",
        &config.dotenv_options(),
    );

    assert_eq!(env.len(), 1);
    assert_eq!(env["FLAG"], "");
    assert!(!env.contains_key("1BAD"));
    assert!(!env.contains_key("2BAD"));
}

#[test]
fn test_loader_from_config() {
    let config = Config::parse(
        "[dotenv]\nfiles = [\"base.env\", \"local.env\"]\nrequired = true\ninclude_system = true\nexpand = false\n",
    )
    .unwrap();
    let loader = config.loader();

    assert_eq!(loader.len(), 3);
    assert!(!loader.expands());
    let files: Vec<&Path> = loader.file_sources().map(|f| f.path()).collect();
    assert_eq!(files, vec![Path::new("base.env"), Path::new("local.env")]);
    assert!(loader.file_sources().all(|f| f.required()));
}

#[test]
fn test_loaded_config_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("definitely-missing-enver.toml");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}
