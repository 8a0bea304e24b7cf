// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         show / get / check / files
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                         loader
//!               files, strings, process env
//!                 |          |          |
//!                 v          v          v
//!              dotenv     expand      store
//!             scanner    ${name}    Enver, Property
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use enver_rs::loader::EnvLoader;
//! use enver_rs::store::Enver;
//!
//! let store = Enver::new();
//! let url = store.string("URL");
//!
//! EnvLoader::new()
//!     .add_str("HOST=localhost\nURL=http://${HOST}")
//!     .load_into(&store)?;
//!
//! assert_eq!(url.get().as_deref(), Some("http://localhost"));
//! # Ok::<(), enver_rs::error::LoadError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod dotenv;
pub mod error;
pub mod expand;
pub mod loader;
pub mod logging;
pub mod store;
pub mod utility;
