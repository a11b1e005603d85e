// SPDX-License-Identifier: MPL-2.0
//! The notification facade.
//!
//! [`Notifications`] is a cheap, clonable handle to one shared notification
//! slot. Every clone mutates the same state, so the handle can be handed to
//! any component that needs to raise or dismiss a toast.

use super::notification::{NotificationState, Severity, ShowOptions};
use super::state::{Store, SubscriptionId};
use crate::config::Defaults;
use std::rc::Rc;

#[derive(Debug)]
struct Inner {
    store: Store,
    defaults: Defaults,
}

/// Handle to the single current notification.
///
/// The handle is `Rc`-based and stays on the UI thread that created it.
#[derive(Debug, Clone)]
pub struct Notifications {
    inner: Rc<Inner>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    /// Creates a hidden notification slot with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Defaults::default())
    }

    /// Creates a hidden notification slot using `defaults` for unset options.
    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        let store = Store::default();
        store.update(|state| state.timeout_ms = defaults.timeout_ms);
        Self {
            inner: Rc::new(Inner { store, defaults }),
        }
    }

    /// Returns the defaults table this handle applies.
    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.inner.defaults
    }

    /// Displays `message`, replacing whatever is currently shown.
    ///
    /// Unset options fall back to `primary`, the default timeout and no icon.
    pub fn show(&self, message: impl Into<String>, options: ShowOptions) {
        let next = options.into_state(message.into(), self.inner.defaults.timeout_ms);
        tracing::debug!(
            severity = %next.severity,
            timeout_ms = next.timeout_ms,
            icon = next.icon.as_deref(),
            "showing notification"
        );
        self.inner.store.update(|state| *state = next);
    }

    /// Shows a success notification with a check-circle icon.
    pub fn success(&self, message: impl Into<String>, options: ShowOptions) {
        let defaults = &self.inner.defaults;
        let base = ShowOptions::new()
            .color(Severity::Success)
            .icon(defaults.success_icon.clone());
        self.show(message, options.over(base));
    }

    /// Shows an error notification. Errors use the longer error timeout.
    pub fn error(&self, message: impl Into<String>, options: ShowOptions) {
        let defaults = &self.inner.defaults;
        let base = ShowOptions::new()
            .color(Severity::Error)
            .icon(defaults.error_icon.clone())
            .timeout(defaults.error_timeout_ms);
        self.show(message, options.over(base));
    }

    /// Shows a warning notification with an alert icon.
    pub fn warning(&self, message: impl Into<String>, options: ShowOptions) {
        let defaults = &self.inner.defaults;
        let base = ShowOptions::new()
            .color(Severity::Warning)
            .icon(defaults.warning_icon.clone());
        self.show(message, options.over(base));
    }

    /// Shows an informational notification with an information icon.
    pub fn info(&self, message: impl Into<String>, options: ShowOptions) {
        let defaults = &self.inner.defaults;
        let base = ShowOptions::new()
            .color(Severity::Info)
            .icon(defaults.info_icon.clone());
        self.show(message, options.over(base));
    }

    /// Hides the current notification, keeping its content.
    ///
    /// Hiding an already hidden notification does nothing.
    pub fn hide(&self) {
        if self.inner.store.update(|state| state.visible = false) {
            tracing::debug!("hiding notification");
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> NotificationState {
        self.inner.store.snapshot()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.store.with(|state| state.visible)
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.inner.store.with(|state| state.message.clone())
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.inner.store.with(|state| state.severity.clone())
    }

    #[must_use]
    pub fn timeout_ms(&self) -> i64 {
        self.inner.store.with(|state| state.timeout_ms)
    }

    #[must_use]
    pub fn icon(&self) -> Option<String> {
        self.inner.store.with(|state| state.icon.clone())
    }

    /// Registers `listener` to receive the new state after every change.
    pub fn subscribe(&self, listener: impl Fn(&NotificationState) + 'static) -> SubscriptionId {
        self.inner.store.subscribe(listener)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.store.unsubscribe(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.store.listener_count()
    }

    /// Returns whether both handles refer to the same notification slot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Notifications) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
