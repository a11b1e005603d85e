// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the per-severity defaults table to a
//! `notifications.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use notification_center::config::{self, Defaults};
//! use std::path::PathBuf;
//!
//! // Load the installation's defaults, or the built-in ones
//! let mut defaults = config::load("MyApp").unwrap_or_default();
//!
//! // Keep errors on screen a little longer
//! defaults.error_timeout_ms = 8000;
//! config::save("MyApp", &defaults).expect("Failed to save defaults");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/notifications.toml");
//! config::save_to_path(&defaults, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.error_timeout_ms, 8000);
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{
    DEFAULT_TIMEOUT_MS, ERROR_ICON, ERROR_TIMEOUT_MS, INFO_ICON, SUCCESS_ICON, WARNING_ICON,
};

const CONFIG_FILE: &str = "notifications.toml";

/// Values the facade applies when a caller leaves an option unset.
///
/// Any field missing from a file keeps its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Timeout for `show`, `success`, `warning` and `info`.
    pub timeout_ms: i64,
    /// Timeout for `error`.
    pub error_timeout_ms: i64,
    pub success_icon: String,
    pub error_icon: String,
    pub warning_icon: String,
    pub info_icon: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            error_timeout_ms: ERROR_TIMEOUT_MS,
            success_icon: SUCCESS_ICON.to_string(),
            error_icon: ERROR_ICON.to_string(),
            warning_icon: WARNING_ICON.to_string(),
            info_icon: INFO_ICON.to_string(),
        }
    }
}

fn get_default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the defaults for `app_name` from the user's config directory.
///
/// Returns the built-in defaults when no file exists.
pub fn load(app_name: &str) -> Result<Defaults> {
    if let Some(path) = get_default_config_path(app_name) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Defaults::default())
}

pub fn save(app_name: &str, defaults: &Defaults) -> Result<()> {
    if let Some(path) = get_default_config_path(app_name) {
        return save_to_path(defaults, &path);
    }
    Ok(())
}

/// Reads a defaults file. An unparsable file yields the built-in defaults.
pub fn load_from_path(path: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(defaults) => Ok(defaults),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring invalid notification defaults");
            Ok(Defaults::default())
        }
    }
}

pub fn save_to_path(defaults: &Defaults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(defaults)?;
    fs::write(path, content)?;
    Ok(())
}
