// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the reactive store fed by loaders.

use std::fs;
use std::sync::{Arc, Mutex};

use enver_rs::error::PropertyError;
use enver_rs::loader::EnvLoader;
use enver_rs::store::Enver;

#[test]
fn store_properties_follow_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "PORT=8080\nDEBUG=true\n").unwrap();

    let store = Enver::new();
    let port = store.int("PORT");
    let debug = store.boolean_or("DEBUG", false);
    let host = store.required("HOST");

    assert_eq!(port.get(), None);
    assert!(!debug.get());

    let loader = EnvLoader::new().add_file(&path);
    loader.load_into(&store).unwrap();

    assert_eq!(port.get(), Some(8080));
    assert!(debug.get());
    assert_eq!(
        host.get(),
        Err(PropertyError::Missing {
            name: "HOST".to_string()
        })
    );

    fs::write(&path, "PORT=9090\nDEBUG=false\nHOST=example.org\n").unwrap();
    loader.load_into(&store).unwrap();

    assert_eq!(port.get(), Some(9090));
    assert!(!debug.get());
    assert_eq!(host.get().as_deref(), Ok("example.org"));
}

#[test]
fn store_subscriptions_see_loaded_values() {
    let store = Enver::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&seen);
    let subscription = store.subscribe_to("URL", move |value| {
        sink.lock().unwrap().push(value.to_string());
    });

    EnvLoader::new()
        .add_str("HOST=a\nURL=http://${HOST}")
        .load_into(&store)
        .unwrap();
    EnvLoader::new()
        .add_str("HOST=b\nURL=http://${HOST}")
        .load_into(&store)
        .unwrap();

    drop(subscription);
    store.insert("URL", "ignored");

    assert_eq!(*seen.lock().unwrap(), vec!["http://a", "http://b"]);
}

#[test]
fn store_failed_load_leaves_store_untouched() {
    let store = Enver::from_map([("A".to_string(), "1".to_string())].into());

    let result = EnvLoader::new()
        .add_str("A=2")
        .add_file("definitely-missing.env")
        .load_into(&store);

    assert!(result.is_err());
    assert_eq!(store.get("A").as_deref(), Some("1"));
}
