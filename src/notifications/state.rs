// SPDX-License-Identifier: MPL-2.0
//! Observable storage for the current notification.
//!
//! The store holds one [`NotificationState`] and a list of listeners that
//! are called synchronously whenever a write changes the record. Listeners
//! may call back into the store while being notified: a write made during
//! delivery restarts the pass with a fresh snapshot, so the last state every
//! listener sees is the current one.

use super::notification::NotificationState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifies a registered state listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

type Listener = Rc<dyn Fn(&NotificationState)>;

#[derive(Default)]
pub(crate) struct Store {
    state: RefCell<NotificationState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

/// Clears the delivery flags even if a listener panics.
struct DeliveryGuard<'a>(&'a Store);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.notifying.set(false);
        self.0.pending.set(false);
    }
}

impl Store {
    pub(crate) fn snapshot(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    pub(crate) fn with<R>(&self, read: impl FnOnce(&NotificationState) -> R) -> R {
        read(&*self.state.borrow())
    }

    /// Applies `update` and notifies listeners if the record changed.
    ///
    /// Returns whether anything changed.
    pub(crate) fn update(&self, update: impl FnOnce(&mut NotificationState)) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            update(&mut *state);
            *state != before
        };
        if changed {
            self.notify();
        }
        changed
    }

    pub(crate) fn subscribe(
        &self,
        listener: impl Fn(&NotificationState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId::new();
        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        tracing::trace!(?id, "notification listener subscribed");
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() < before;
        if removed {
            tracing::trace!(?id, "notification listener unsubscribed");
        }
        removed
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn listener(&self, id: SubscriptionId) -> Option<Listener> {
        self.listeners
            .borrow()
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, listener)| Rc::clone(listener))
    }

    fn notify(&self) {
        // A write from inside a listener only marks the outer pass stale.
        if self.notifying.replace(true) {
            self.pending.set(true);
            return;
        }
        let _guard = DeliveryGuard(self);

        loop {
            self.pending.set(false);
            let snapshot = self.snapshot();
            let ids: Vec<SubscriptionId> =
                self.listeners.borrow().iter().map(|(id, _)| *id).collect();

            for id in ids {
                if self.pending.get() {
                    break;
                }
                // Skip listeners removed earlier in this pass.
                if let Some(listener) = self.listener(id) {
                    listener(&snapshot);
                }
            }

            if !self.pending.get() {
                break;
            }
            tracing::trace!("notification state changed during delivery, restarting");
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listener_count())
            .field("notifying", &self.notifying.get())
            .finish()
    }
}
