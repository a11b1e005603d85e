// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`NotificationState`] record read by renderers,
//! the [`Severity`] tag and the per-call [`ShowOptions`].

use crate::config::DEFAULT_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tag driving the notification's color and semantic category.
///
/// Unknown tags are kept verbatim in [`Severity::Custom`] and passed through
/// to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Neutral notification, used by plain `show`.
    #[default]
    Primary,
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but did not fail.
    Warning,
    /// Informational message.
    Info,
    /// Caller-supplied tag, e.g. `"secondary"`.
    ///
    /// Holds only tags with no variant of their own. Build severities with
    /// `From<&str>`/`From<String>` or [`Severity::normalized`] so that
    /// `"error"` always becomes [`Severity::Error`].
    Custom(String),
}

impl Severity {
    /// Returns the tag string the renderer receives.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Primary => "primary",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Custom(tag) => tag,
        }
    }

    /// Maps a `Custom` holding a known tag to its own variant.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Severity::Custom(tag) => Severity::from(tag),
            known => known,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        match tag {
            "primary" => Severity::Primary,
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => Severity::Custom(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(tag: String) -> Self {
        match Severity::from(tag.as_str()) {
            Severity::Custom(_) => Severity::Custom(tag),
            known => known,
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// The single notification currently represented.
///
/// `visible` is the only display signal. The other fields keep their last
/// values after a hide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    /// Auto-dismiss delay for the renderer. Not interpreted here.
    pub timeout_ms: i64,
    pub icon: Option<String>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Primary,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            icon: None,
        }
    }
}

/// Optional overrides for a single show call.
///
/// Every field left unset falls back to the calling method's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowOptions {
    color: Option<Severity>,
    timeout: Option<i64>,
    // Outer `None` means unset; `Some(None)` explicitly requests no icon.
    icon: Option<Option<String>>,
}

impl ShowOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the severity tag.
    #[must_use]
    pub fn color(mut self, color: impl Into<Severity>) -> Self {
        self.color = Some(color.into().normalized());
        self
    }

    /// Sets the auto-dismiss delay in milliseconds.
    #[must_use]
    pub fn timeout(mut self, timeout_ms: i64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    /// Sets the icon identifier.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(Some(icon.into()));
        self
    }

    /// Shows no icon, even where the method would pick one.
    #[must_use]
    pub fn without_icon(mut self) -> Self {
        self.icon = Some(None);
        self
    }

    /// Layers `self` on top of `base`, field by field.
    #[must_use]
    pub fn over(self, base: ShowOptions) -> ShowOptions {
        ShowOptions {
            color: self.color.or(base.color),
            timeout: self.timeout.or(base.timeout),
            icon: self.icon.or(base.icon),
        }
    }

    /// Resolves the options into a visible state for `message`, using the
    /// plain `show` fallbacks for anything still unset.
    pub(crate) fn into_state(self, message: String, fallback_timeout_ms: i64) -> NotificationState {
        NotificationState {
            visible: true,
            message,
            severity: self.color.unwrap_or_default(),
            timeout_ms: self.timeout.unwrap_or(fallback_timeout_ms),
            icon: self.icon.flatten(),
        }
    }
}
