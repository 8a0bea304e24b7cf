// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the loaders.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::{EnvLoader, FileSource, load_file, load_str, load_system};
use crate::dotenv::{DotenvOptions, ErrorPolicy, ParseError, Statement, Variables};
use crate::error::LoadError;
use crate::store::Enver;
use crate::utility::encoding::Encoding;

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Single sources
// =============================================================================

#[test]
fn test_load_str() {
    let loaded = load_str("A=1\nB='two'", &DotenvOptions::default());
    assert_eq!(loaded, vars(&[("A", "1"), ("B", "two")]));
}

#[test]
fn test_load_file_streams_lines() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        ".env",
        b"# comment\r\nNAME=Hassan\r\nDESCRIPTION=\"\r\nAlpha\r\n\"\r\n",
    );

    let loaded = load_file(&path, &DotenvOptions::default()).unwrap();

    assert_eq!(loaded, vars(&[("NAME", "Hassan"), ("DESCRIPTION", "\nAlpha\n")]));
}

#[test]
fn test_load_file_strips_utf8_bom() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, ".env", b"\xEF\xBB\xBFFIRST=1\nSECOND=2\n");

    let loaded = load_file(&path, &DotenvOptions::default()).unwrap();

    assert_eq!(loaded, vars(&[("FIRST", "1"), ("SECOND", "2")]));
}

#[test]
fn test_load_file_utf16_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "A=é\nB=2".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = write(&dir, ".env", &bytes);

    let loaded = load_file(&path, &DotenvOptions::default()).unwrap();

    assert_eq!(loaded, vars(&[("A", "é"), ("B", "2")]));
}

#[test]
fn test_load_file_windows_1252() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "legacy.env", b"CITY=Z\xfcrich\n");
    let source = FileSource::builder()
        .path(&path)
        .with_encoding(Encoding::Windows1252)
        .build();

    let loaded = EnvLoader::new()
        .add_file_source(source)
        .load_merged()
        .unwrap();

    assert_eq!(loaded["CITY"], "Zürich");
}

#[test]
fn test_load_file_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.env", b"CITY=Z\xfcrich\n");

    let err = load_file(&path, &DotenvOptions::default()).unwrap_err();

    assert!(matches!(err, LoadError::InvalidEncoding { ref encoding, .. } if encoding == "UTF-8"));
}

#[test]
fn test_load_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.env");

    let err = load_file(&path, &DotenvOptions::default()).unwrap_err();

    assert!(matches!(err, LoadError::NotFound { .. }));
}

#[test]
fn test_file_origin_in_errors() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.env", b"OK=1\nBROKEN\n");
    let source = FileSource::new(&path);

    let mut out: Vec<Result<Statement, ParseError>> = Vec::new();
    assert!(source.consume(&mut out).unwrap());

    let error = out[1].as_ref().unwrap_err().clone().with_origin(Some(source.label().as_str()));
    assert_eq!(
        error.to_string(),
        format!("missing assignment operator for 'BROKEN' at {}:2", path.display())
    );
}

#[test]
fn test_load_system_reads_process_environment() {
    let system = load_system();
    let expected: Variables = std::env::vars().collect();

    assert_eq!(system, expected);
}

// =============================================================================
// EnvLoader
// =============================================================================

#[test]
fn test_later_sources_override() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.env", b"A=1\nB=1\n");
    let local = write(&dir, "local.env", b"B=2\n");

    let loader = EnvLoader::new()
        .add_file(&base)
        .add_file_optional(&local)
        .add_str("C=3");

    assert_eq!(loader.load().unwrap().len(), 3);
    assert_eq!(
        loader.load_merged().unwrap(),
        vars(&[("A", "1"), ("B", "2"), ("C", "3")])
    );
}

#[test]
fn test_missing_optional_file_is_skipped() {
    let dir = TempDir::new().unwrap();

    let loader = EnvLoader::new()
        .add_file_optional(dir.path().join("nope.env"))
        .add_str("A=1");

    assert_eq!(loader.load().unwrap(), vec![vars(&[("A", "1")])]);
    assert_eq!(loader.loaded_files().len(), 1);
}

#[test]
fn test_missing_required_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.env");

    let err = EnvLoader::new().add_file(&missing).load().unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("dotenv file not found: {}", missing.display())
    );
}

#[test]
fn test_load_expanded_across_files() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.env", b"PATH=/usr/bin\nHOST=localhost\n");
    let local = write(&dir, "local.env", b"PATH=/opt/bin:${PATH}\nURL=http://${HOST}/\n");

    let loaded = EnvLoader::new()
        .add_file(&base)
        .add_file(&local)
        .load_expanded()
        .unwrap();

    assert_eq!(loaded["PATH"], "/opt/bin:/usr/bin");
    assert_eq!(loaded["URL"], "http://localhost/");
}

#[test]
fn test_options_apply_to_every_source() {
    let loader = EnvLoader::new()
        .with_options(DotenvOptions::default().policy(ErrorPolicy::Keep))
        .add_str("FLAG")
        .add_str("1BAD=x");

    assert_eq!(loader.load_merged().unwrap(), vars(&[("1BAD", "x"), ("FLAG", "")]));

    let strict = loader.with_options(DotenvOptions::strict());
    assert_eq!(strict.load_merged().unwrap(), Variables::new());
}

#[test]
fn test_load_into_store() {
    let store = Enver::new();
    let url = store.create_property("URL");

    EnvLoader::new()
        .add_str("HOST=h")
        .add_str("URL=${HOST}:1")
        .load_into(&store)
        .unwrap();
    assert_eq!(url.get().as_deref(), Some("h:1"));

    EnvLoader::new()
        .with_expand(false)
        .add_str("URL=${HOST}:2")
        .load_into(&store)
        .unwrap();
    assert_eq!(url.get().as_deref(), Some("${HOST}:2"));
}

#[test]
fn test_format_loaded_files() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "base.env", b"A=1\n");

    let loader = EnvLoader::new()
        .add_system()
        .add_file(&base)
        .add_file_optional(dir.path().join("absent.env"))
        .add_str_labeled("inline", "B=2");

    let lines = loader.format_loaded_files();
    let lines: Vec<String> = lines
        .iter()
        .map(|line| line.replace(&dir.path().display().to_string(), "[TMP]"))
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    1. [system] <environment>
    2. [file] [TMP]/base.env
    3. [string] inline
    ");
}

#[test]
fn test_file_sources_listed_in_order() {
    let loader = EnvLoader::new()
        .add_file("a.env")
        .add_str("X=1")
        .add_file_optional("b.env");

    let paths: Vec<&Path> = loader.file_sources().map(FileSource::path).collect();

    assert_eq!(paths, vec![Path::new("a.env"), Path::new("b.env")]);
    assert_eq!(loader.len(), 3);
}
