// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The reactive store.
//!
//! ```text
//! Enver (clone = same store)
//!   Arc<Mutex<StoreState>>
//!     vars:          BTreeMap<String, String>
//!     registrations: (Target, Weak<dyn Listener>)
//!
//! set / merge:  lock -> mutate -> collect live listeners -> unlock
//!               -> invoke listeners (may call back into the store)
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use super::property::{Property, PropertyCell};
use super::types::{Listener, Registration, StoreState, Target};
use crate::dotenv::Variables;

/// An in-memory, thread-safe environment with change notification.
///
/// Every instance starts empty; populate it with [`Enver::set`] or
/// [`Enver::merge`]. Clones share the same underlying store.
///
/// # Example
///
/// ```
/// use enver_rs::store::Enver;
///
/// let enver = Enver::new();
/// let port = enver.int("PORT");
///
/// assert_eq!(port.get(), None);
/// enver.insert("PORT", "8080");
/// assert_eq!(port.get(), Some(8080));
/// ```
#[derive(Clone, Default)]
pub struct Enver {
    state: Arc<Mutex<StoreState>>,
}

impl Enver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `vars` (no notifications).
    #[must_use]
    pub fn from_map(vars: Variables) -> Self {
        let enver = Self::new();
        *enver.lock().vars_mut() = vars;
        enver
    }

    /// The process-wide shared store.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Enver> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Gets the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().vars().get(name).cloned()
    }

    /// Returns true if `name` is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lock().vars().contains_key(name)
    }

    /// Sets `name` to `value`, or removes it when `value` is `None`, and
    /// notifies listeners of `name`.
    pub fn set(&self, name: &str, value: Option<String>) {
        let listeners = {
            let mut state = self.lock();
            match value {
                Some(value) => {
                    state.vars_mut().insert(name.to_owned(), value);
                }
                None => {
                    state.vars_mut().remove(name);
                }
            }
            state.listeners_for(&[name])
        };

        self.dispatch(listeners);
    }

    /// Sets `name` to `value`.
    pub fn insert(&self, name: &str, value: impl Into<String>) {
        self.set(name, Some(value.into()));
    }

    /// Removes `name`.
    pub fn remove(&self, name: &str) {
        self.set(name, None);
    }

    /// Inserts every entry of `source` and notifies listeners of each name.
    pub fn merge(&self, source: Variables) {
        if source.is_empty() {
            return;
        }

        let names: Vec<String> = source.keys().cloned().collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let listeners = {
            let mut state = self.lock();
            state.vars_mut().extend(source);
            state.listeners_for(&refs)
        };

        tracing::trace!(count = refs.len(), "merged variables");
        self.dispatch(listeners);
    }

    fn dispatch(&self, listeners: Vec<(Arc<dyn Listener>, &str)>) {
        for (listener, name) in listeners {
            tracing::trace!(variable = %name, "notifying listener");
            listener.on_change(self, name);
        }
    }

    /// Returns a snapshot of all variables.
    #[must_use]
    pub fn to_map(&self) -> Variables {
        self.lock().vars().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().vars().len()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().vars().is_empty()
    }

    /// Creates a property that always reads the latest value of `name`.
    #[must_use]
    pub fn create_property(&self, name: &str) -> Property<Option<String>> {
        self.create_property_with(name, |value| value.map(str::to_owned))
    }

    /// Creates a property reading `transform(value of name)`.
    ///
    /// The transform runs lazily: a change only marks the property stale,
    /// the next read recomputes it once.
    #[must_use]
    pub fn create_property_with<T, F>(&self, name: &str, transform: F) -> Property<T>
    where
        T: Send + Sync + 'static,
        F: Fn(Option<&str>) -> T + Send + Sync + 'static,
    {
        let cell = Arc::new(PropertyCell::new(self.clone(), name, transform));
        let listener: Arc<dyn Listener> = cell.clone();
        self.lock()
            .register(Registration::new(Target::Name(name.to_owned()), &listener));
        Property::new(cell)
    }

    /// Calls `block` with a snapshot now and after every change.
    ///
    /// The callback stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, block: F) -> Subscription
    where
        F: Fn(&Variables) + Send + Sync + 'static,
    {
        let listener: Arc<dyn Listener> = Arc::new(SnapshotListener(block));
        self.lock()
            .register(Registration::new(Target::All, &listener));
        listener.on_change(self, "");
        Subscription {
            _listener: listener,
        }
    }

    /// Calls `block` with the new value after every change of `name` that
    /// leaves it set.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_to<F>(&self, name: &str, block: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let listener: Arc<dyn Listener> = Arc::new(VariableListener(block));
        self.lock()
            .register(Registration::new(Target::Name(name.to_owned()), &listener));
        Subscription {
            _listener: listener,
        }
    }

    /// Number of live listeners.
    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.lock().registration_count()
    }
}

impl fmt::Debug for Enver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Enver")
            .field("vars", state.vars())
            .field("listeners", &state.registration_count())
            .finish()
    }
}

/// Keeps a subscription registered while alive.
pub struct Subscription {
    _listener: Arc<dyn Listener>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

struct SnapshotListener<F>(F);

impl<F> Listener for SnapshotListener<F>
where
    F: Fn(&Variables) + Send + Sync,
{
    fn on_change(&self, store: &Enver, _name: &str) {
        let snapshot = store.to_map();
        (self.0)(&snapshot);
    }
}

struct VariableListener<F>(F);

impl<F> Listener for VariableListener<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn on_change(&self, store: &Enver, name: &str) {
        if let Some(value) = store.get(name) {
            (self.0)(&value);
        }
    }
}
