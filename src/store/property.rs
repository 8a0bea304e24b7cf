// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live, cached views of one variable.
//!
//! ```text
//! Enver::set(name) --> PropertyCell::on_change --> dirty = true
//!
//! Property::get()
//!   dirty? --yes--> transform(store.get(name)) --> cache, dirty = false
//!     |
//!     no ---------> cached value
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::enver::Enver;
use super::types::Listener;

type Transform<T> = Box<dyn Fn(Option<&str>) -> T + Send + Sync>;

/// State shared between a [`Property`] and the store's weak registration.
pub(super) struct PropertyCell<T> {
    store: Enver,
    name: String,
    transform: Transform<T>,
    dirty: AtomicBool,
    cache: Mutex<Option<T>>,
}

impl<T> PropertyCell<T> {
    pub(super) fn new<F>(store: Enver, name: &str, transform: F) -> Self
    where
        F: Fn(Option<&str>) -> T + Send + Sync + 'static,
    {
        Self {
            store,
            name: name.to_owned(),
            transform: Box::new(transform),
            dirty: AtomicBool::new(false),
            cache: Mutex::new(None),
        }
    }

    /// Runs `f` on the cached value, recomputing it first if a change
    /// was seen since the last read.
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        // Clear the flag before reading so a concurrent change re-marks it.
        if self.dirty.swap(false, Ordering::AcqRel) {
            *cache = None;
        }

        let value = cache.get_or_insert_with(|| {
            let raw = self.store.get(&self.name);
            (self.transform)(raw.as_deref())
        });
        f(value)
    }
}

impl<T: Send + Sync> Listener for PropertyCell<T> {
    fn on_change(&self, _store: &Enver, _name: &str) {
        self.dirty.store(true, Ordering::Release);
    }
}

/// A read-only view of `transform(value of name)` that follows the store.
///
/// The transform runs at most once per change; reads in between return the
/// cached result. Dropping the property deregisters it.
pub struct Property<T> {
    cell: Arc<PropertyCell<T>>,
}

impl<T> Property<T> {
    pub(super) const fn new(cell: Arc<PropertyCell<T>>) -> Self {
        Self { cell }
    }

    /// The variable this property reads.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.cell.name
    }

    /// Runs `f` on the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.cell.read(f)
    }
}

impl<T: Clone> Property<T> {
    /// The current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.cell.name)
            .field("dirty", &self.cell.dirty.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}
