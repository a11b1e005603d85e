// SPDX-License-Identifier: MPL-2.0
//! `notification_center` holds the single toast/snackbar notification of a
//! front-end application and the severity-tagged facade that raises it.
//!
//! A renderer subscribes to the shared state and draws the banner; callers
//! only ever talk to the [`notifications::Notifications`] handle, which the
//! host registers through [`plugin`]. Per-installation defaults live in
//! [`config`].

#![doc(html_root_url = "https://docs.rs/notification_center/0.1.0")]

pub mod config;
pub mod error;
pub mod notifications;
pub mod plugin;
