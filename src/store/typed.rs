// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed property accessors.
//!
//! Conversions trim the raw value first. A value that does not convert reads
//! as `None` (or the default); use [`Enver::required_parsed`] to see why.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::enver::Enver;
use super::property::Property;
use crate::error::PropertyError;

/// Strict boolean parsing: only `true` and `false`, case-insensitive.
fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn convert<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::debug!(variable = %name, value = %raw, "ignoring unconvertible value");
    }
    parsed
}

/// `humantime` durations such as `90s` or `1h 30m`.
fn convert_duration(name: &str, raw: Option<&str>) -> Option<Duration> {
    let raw = raw?;
    match humantime::parse_duration(raw.trim()) {
        Ok(duration) => Some(duration),
        Err(e) => {
            tracing::debug!(variable = %name, value = %raw, error = %e, "ignoring unconvertible duration");
            None
        }
    }
}

impl Enver {
    /// Alias of [`Enver::create_property`].
    #[must_use]
    pub fn string(&self, name: &str) -> Property<Option<String>> {
        self.create_property(name)
    }

    /// The value of `name`, or `default` while it is unset.
    #[must_use]
    pub fn string_or(&self, name: &str, default: impl Into<String>) -> Property<String> {
        let default = default.into();
        self.create_property_with(name, move |raw| {
            raw.map_or_else(|| default.clone(), str::to_owned)
        })
    }

    /// `true`/`false` (any case); anything else reads as `None`.
    #[must_use]
    pub fn boolean(&self, name: &str) -> Property<Option<bool>> {
        self.create_property_with(name, |raw| raw.and_then(parse_bool))
    }

    #[must_use]
    pub fn boolean_or(&self, name: &str, default: bool) -> Property<bool> {
        self.create_property_with(name, move |raw| raw.and_then(parse_bool).unwrap_or(default))
    }

    /// The value of `name` parsed with [`FromStr`].
    #[must_use]
    pub fn parsed<T>(&self, name: &str) -> Property<Option<T>>
    where
        T: FromStr + Send + Sync + 'static,
    {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| convert(&owned, raw))
    }

    #[must_use]
    pub fn parsed_or<T>(&self, name: &str, default: T) -> Property<T>
    where
        T: FromStr + Clone + Send + Sync + 'static,
    {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| {
            convert(&owned, raw).unwrap_or_else(|| default.clone())
        })
    }

    #[must_use]
    pub fn int(&self, name: &str) -> Property<Option<i32>> {
        self.parsed(name)
    }

    #[must_use]
    pub fn long(&self, name: &str) -> Property<Option<i64>> {
        self.parsed(name)
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Property<Option<f32>> {
        self.parsed(name)
    }

    #[must_use]
    pub fn double(&self, name: &str) -> Property<Option<f64>> {
        self.parsed(name)
    }

    /// The value of `name` as a duration (`250ms`, `90s`, `1h 30m`).
    #[must_use]
    pub fn duration(&self, name: &str) -> Property<Option<Duration>> {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| convert_duration(&owned, raw))
    }

    #[must_use]
    pub fn duration_or(&self, name: &str, default: Duration) -> Property<Duration> {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| {
            convert_duration(&owned, raw).unwrap_or(default)
        })
    }

    /// The value of `name` as a path (not trimmed, not checked).
    #[must_use]
    pub fn path(&self, name: &str) -> Property<Option<PathBuf>> {
        self.create_property_with(name, |raw| raw.map(PathBuf::from))
    }

    /// The value of `name`, or [`PropertyError::Missing`].
    #[must_use]
    pub fn required(&self, name: &str) -> Property<Result<String, PropertyError>> {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| {
            raw.map(str::to_owned).ok_or_else(|| PropertyError::Missing {
                name: owned.clone(),
            })
        })
    }

    /// The value of `name` parsed with [`FromStr`], or why it is unusable.
    #[must_use]
    pub fn required_parsed<T>(&self, name: &str) -> Property<Result<T, PropertyError>>
    where
        T: FromStr + Send + Sync + 'static,
        T::Err: Display,
    {
        let owned = name.to_owned();
        self.create_property_with(name, move |raw| {
            let raw = raw.ok_or_else(|| PropertyError::Missing {
                name: owned.clone(),
            })?;
            raw.trim().parse().map_err(|e: T::Err| PropertyError::Invalid {
                name: owned.clone(),
                value: raw.to_owned(),
                message: e.to_string(),
            })
        })
    }
}
