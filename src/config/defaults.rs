// SPDX-License-Identifier: MPL-2.0
//! Built-in default values for the notification facade.
//!
//! These constants are the single source of truth for what each facade
//! method applies when the caller leaves an option unset. A defaults file
//! (see [`super::Defaults`]) may override them per installation.

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Auto-dismiss delay used by `show`, `success`, `warning` and `info` (ms).
pub const DEFAULT_TIMEOUT_MS: i64 = 4000;

/// Auto-dismiss delay used by `error` (ms). Errors stay up longer.
pub const ERROR_TIMEOUT_MS: i64 = 6000;

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Icon shown by `success` unless overridden.
pub const SUCCESS_ICON: &str = "mdi-check-circle";

/// Icon shown by `error` unless overridden.
pub const ERROR_ICON: &str = "mdi-alert-circle";

/// Icon shown by `warning` unless overridden.
pub const WARNING_ICON: &str = "mdi-alert";

/// Icon shown by `info` unless overridden.
pub const INFO_ICON: &str = "mdi-information";
