// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reactive environment store.
//!
//! # Architecture
//!
//! ```text
//!            Enver (Arc<Mutex<StoreState>>)
//!           /        |               \
//!   get/set/merge  create_property   subscribe / subscribe_to
//!                    |                     |
//!              Property<T>            Subscription
//!       (Arc<PropertyCell<T>>)     (Arc<dyn Listener>)
//!
//!   The store keeps only Weak<dyn Listener>: dropping a Property or a
//!   Subscription is all it takes to deregister it.
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use enver_rs::store::Enver;
//!
//! let enver = Enver::new();
//! let name = enver.create_property("NAME");
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let _sub = enver.subscribe_to("NAME", move |value| {
//!     sink.lock().unwrap().push(value.to_owned());
//! });
//!
//! enver.insert("NAME", "Hassan");
//! assert_eq!(name.get().as_deref(), Some("Hassan"));
//! assert_eq!(*seen.lock().unwrap(), ["Hassan"]);
//! ```

pub mod enver;
pub mod property;
mod typed;
mod types;


pub use enver::{Enver, Subscription};
pub use property::Property;
