// SPDX-License-Identifier: MPL-2.0
//! Host registration for the notification facade.
//!
//! The host's composition root owns an [`AppContext`] and installs plugins
//! into it. [`NotificationsPlugin`] makes one [`Notifications`] handle
//! reachable as a global property under each configured alias and as a
//! provided value under [`PROVIDE_KEY`]. Every path yields a clone of the
//! same handle.
//!
//! ```
//! use notification_center::plugin::{self, AppContext, ALIAS, LEGACY_ALIAS, PROVIDE_KEY};
//! use notification_center::notifications::{Notifications, ShowOptions};
//!
//! let mut app = AppContext::new();
//! let notifications = plugin::install(&mut app);
//!
//! let legacy: Notifications = app.global(LEGACY_ALIAS).expect("legacy alias");
//! let injected: Notifications = app.inject(PROVIDE_KEY).expect("provided handle");
//! legacy.warning("Disk almost full", ShowOptions::new());
//!
//! assert!(injected.is_visible());
//! assert!(notifications.ptr_eq(&app.global::<Notifications>(ALIAS).unwrap()));
//! ```

use crate::config::Defaults;
use crate::notifications::Notifications;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

/// Legacy global property name.
pub const LEGACY_ALIAS: &str = "$toastr";

/// Current global property name.
pub const ALIAS: &str = "$notify";

/// Key under which the handle is provided for injection.
pub const PROVIDE_KEY: &str = "notifications";

/// Minimal composition root: named global properties plus provided values.
///
/// Values are stored type-erased and handed out as clones.
#[derive(Default)]
pub struct AppContext {
    globals: HashMap<String, Rc<dyn Any>>,
    provided: HashMap<String, Rc<dyn Any>>,
}

impl AppContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `plugin` into this context.
    pub fn use_plugin(&mut self, plugin: &impl Plugin) -> &mut Self {
        plugin.install(self);
        self
    }

    /// Registers a global property, replacing any previous value of that name.
    pub fn set_global<T: Clone + 'static>(&mut self, name: impl Into<String>, value: T) {
        self.globals.insert(name.into(), Rc::new(value));
    }

    /// Returns a clone of the global property `name` if it holds a `T`.
    #[must_use]
    pub fn global<T: Clone + 'static>(&self, name: &str) -> Option<T> {
        self.globals
            .get(name)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Provides `value` for injection under `key`.
    pub fn provide<T: Clone + 'static>(&mut self, key: impl Into<String>, value: T) {
        self.provided.insert(key.into(), Rc::new(value));
    }

    /// Returns a clone of the value provided under `key` if it holds a `T`.
    #[must_use]
    pub fn inject<T: Clone + 'static>(&self, key: &str) -> Option<T> {
        self.provided
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Names of all registered global properties, sorted.
    #[must_use]
    pub fn global_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.globals.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut provided: Vec<&str> = self.provided.keys().map(String::as_str).collect();
        provided.sort_unstable();
        f.debug_struct("AppContext")
            .field("globals", &self.global_names())
            .field("provided", &provided)
            .finish()
    }
}

/// Something that can register itself with an [`AppContext`].
pub trait Plugin {
    fn install(&self, app: &mut AppContext);
}

/// Registers a [`Notifications`] handle with the host.
#[derive(Debug, Clone)]
pub struct NotificationsPlugin {
    notifications: Notifications,
    aliases: Vec<String>,
}

impl NotificationsPlugin {
    /// Wraps `notifications`, registering it under [`LEGACY_ALIAS`] and
    /// [`ALIAS`].
    #[must_use]
    pub fn new(notifications: Notifications) -> Self {
        Self {
            notifications,
            aliases: vec![LEGACY_ALIAS.to_string(), ALIAS.to_string()],
        }
    }

    /// Replaces the global alias list. An empty list registers no globals;
    /// the handle is still provided under [`PROVIDE_KEY`].
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

impl Plugin for NotificationsPlugin {
    fn install(&self, app: &mut AppContext) {
        for alias in &self.aliases {
            app.set_global(alias.clone(), self.notifications.clone());
        }
        app.provide(PROVIDE_KEY, self.notifications.clone());
        tracing::debug!(aliases = ?self.aliases, key = PROVIDE_KEY, "notifications installed");
    }
}

/// Creates a handle with the built-in defaults and installs it with the
/// standard aliases. Returns the handle.
pub fn install(app: &mut AppContext) -> Notifications {
    install_with_defaults(app, Defaults::default())
}

/// Like [`install`], with a caller-supplied defaults table.
pub fn install_with_defaults(app: &mut AppContext, defaults: Defaults) -> Notifications {
    let plugin = NotificationsPlugin::new(Notifications::with_defaults(defaults));
    app.use_plugin(&plugin);
    plugin.notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ShowOptions;

    #[test]
    fn install_registers_all_three_paths() {
        let mut app = AppContext::new();
        let notifications = install(&mut app);

        let legacy: Notifications = app.global(LEGACY_ALIAS).unwrap();
        let current: Notifications = app.global(ALIAS).unwrap();
        let injected: Notifications = app.inject(PROVIDE_KEY).unwrap();

        assert!(notifications.ptr_eq(&legacy));
        assert!(notifications.ptr_eq(&current));
        assert!(notifications.ptr_eq(&injected));
        assert_eq!(app.global_names(), vec![ALIAS, LEGACY_ALIAS]);
    }

    #[test]
    fn every_path_drives_the_same_state() {
        let mut app = AppContext::new();
        install(&mut app);

        let legacy: Notifications = app.global(LEGACY_ALIAS).unwrap();
        let injected: Notifications = app.inject(PROVIDE_KEY).unwrap();

        legacy.error("Save failed", ShowOptions::new());
        assert_eq!(injected.message(), "Save failed");

        injected.hide();
        assert!(!legacy.is_visible());
    }

    #[test]
    fn custom_aliases_replace_the_defaults() {
        let mut app = AppContext::new();
        let plugin = NotificationsPlugin::new(Notifications::new()).with_aliases(["$toast"]);
        app.use_plugin(&plugin);

        assert!(app.global::<Notifications>("$toast").is_some());
        assert!(app.global::<Notifications>(LEGACY_ALIAS).is_none());
        assert!(app.inject::<Notifications>(PROVIDE_KEY).is_some());
    }

    #[test]
    fn empty_alias_list_still_provides() {
        let mut app = AppContext::new();
        let plugin = NotificationsPlugin::new(Notifications::new()).with_aliases(Vec::<String>::new());
        app.use_plugin(&plugin);

        assert!(app.global_names().is_empty());
        let injected: Notifications = app.inject(PROVIDE_KEY).unwrap();
        assert!(injected.ptr_eq(plugin.notifications()));
    }

    #[test]
    fn lookup_with_wrong_type_is_none() {
        let mut app = AppContext::new();
        app.set_global("$answer", 42_u32);
        install(&mut app);

        assert_eq!(app.global::<u32>("$answer"), Some(42));
        assert!(app.global::<String>("$answer").is_none());
        assert!(app.inject::<u32>(PROVIDE_KEY).is_none());
        assert!(app.inject::<Notifications>("missing").is_none());
    }

    #[test]
    fn install_with_defaults_uses_the_table() {
        let mut app = AppContext::new();
        let defaults = Defaults {
            error_timeout_ms: 0,
            ..Defaults::default()
        };
        install_with_defaults(&mut app, defaults);

        let notifications: Notifications = app.global(ALIAS).unwrap();
        notifications.error("sticky", ShowOptions::new());
        assert_eq!(notifications.timeout_ms(), 0);
    }
}
