// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> impl Write (stdout in main)
//!   show, get, check, files, options
//! ```

pub mod check;
pub mod config;
pub mod show;
