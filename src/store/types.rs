// enver-rs: Reactive Environment Store & Dotenv Parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the reactive store.
//!
//! ```text
//! Target:       Name(String) | All
//! Listener:     on_change(&Enver, name), held weakly by the store
//! Registration: Target + Weak<dyn Listener>
//! StoreState:   Variables + Vec<Registration> behind one Mutex
//! ```

use std::sync::{Arc, Weak};

use super::enver::Enver;
use crate::dotenv::Variables;

/// What a listener wants to hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Target {
    /// Changes of one variable.
    Name(String),
    /// Every change.
    All,
}

impl Target {
    pub(super) fn matches(&self, name: &str) -> bool {
        match self {
            Self::Name(target) => target == name,
            Self::All => true,
        }
    }
}

/// Receives change notifications.
///
/// Invoked synchronously on the thread that changed the store, after the
/// store lock has been released.
pub(super) trait Listener: Send + Sync {
    fn on_change(&self, store: &Enver, name: &str);
}

/// A weakly held listener and its target.
pub(super) struct Registration {
    target: Target,
    listener: Weak<dyn Listener>,
}

impl Registration {
    pub(super) fn new(target: Target, listener: &Arc<dyn Listener>) -> Self {
        Self {
            target,
            listener: Arc::downgrade(listener),
        }
    }

    pub(super) fn is_alive(&self) -> bool {
        self.listener.strong_count() > 0
    }
}

/// Everything guarded by the store lock.
#[derive(Default)]
pub(super) struct StoreState {
    vars: Variables,
    registrations: Vec<Registration>,
}

impl StoreState {
    pub(super) const fn vars(&self) -> &Variables {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut Variables {
        &mut self.vars
    }

    pub(super) fn register(&mut self, registration: Registration) {
        self.prune();
        self.registrations.push(registration);
    }

    pub(super) fn prune(&mut self) {
        self.registrations.retain(Registration::is_alive);
    }

    pub(super) fn registration_count(&self) -> usize {
        self.registrations.iter().filter(|r| r.is_alive()).count()
    }

    /// Live listeners interested in any of `names`, each with the first
    /// name it matched. Dead registrations are dropped on the way.
    pub(super) fn listeners_for<'n>(
        &mut self,
        names: &[&'n str],
    ) -> Vec<(Arc<dyn Listener>, &'n str)> {
        self.prune();

        let mut out = Vec::new();
        for registration in &self.registrations {
            let Some(listener) = registration.listener.upgrade() else {
                continue;
            };

            if let Some(name) = names.iter().find(|n| registration.target.matches(n)) {
                out.push((listener, *name));
            }
        }

        out
    }
}
