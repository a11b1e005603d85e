// SPDX-License-Identifier: MPL-2.0
//! Toast notification state for user feedback.
//!
//! This module holds the one notification a snackbar-style renderer shows
//! at a time, and the severity-tagged facade that fills it in. Rendering,
//! animation and the auto-dismiss timer belong to the renderer, which reads
//! the state and subscribes to its changes.
//!
//! # Components
//!
//! - [`notification`] - `NotificationState`, `Severity` and `ShowOptions`
//! - [`state`] - observable storage with change subscriptions
//! - [`center`] - the `Notifications` facade handle
//!
//! # Usage
//!
//! ```
//! use notification_center::notifications::{Notifications, Severity, ShowOptions};
//!
//! let notifications = Notifications::new();
//!
//! // A renderer subscribes to state changes
//! notifications.subscribe(|state| {
//!     if state.visible {
//!         // draw the banner, start a timer for `state.timeout_ms`
//!     }
//! });
//!
//! notifications.error("Save failed", ShowOptions::new());
//! assert_eq!(notifications.severity(), Severity::Error);
//! assert_eq!(notifications.timeout_ms(), 6000);
//!
//! notifications.success("Saved", ShowOptions::new().timeout(2000));
//! notifications.hide();
//! assert!(!notifications.is_visible());
//! ```
//!
//! # Defaults
//!
//! | Method    | Severity  | Icon               | Timeout |
//! |-----------|-----------|--------------------|---------|
//! | `show`    | `primary` | none               | 4000 ms |
//! | `success` | `success` | `mdi-check-circle` | 4000 ms |
//! | `error`   | `error`   | `mdi-alert-circle` | 6000 ms |
//! | `warning` | `warning` | `mdi-alert`        | 4000 ms |
//! | `info`    | `info`    | `mdi-information`  | 4000 ms |
//!
//! Options passed by the caller always win over these defaults. A new call
//! replaces the current notification; there is no queue.

mod center;
mod notification;
mod state;

pub use center::Notifications;
pub use notification::{NotificationState, Severity, ShowOptions};
pub use state::SubscriptionId;
