// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   Encoding     UTF-8 / UTF-16LE / UTF-16BE / windows-1252
//!   sniff_bom()  BOM --> (Encoding, BOM length)
//!   decode()     bytes --> UTF-8, BOM first, no replacement characters
//! ```

pub mod encoding;
