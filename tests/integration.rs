// SPDX-License-Identifier: MPL-2.0
use notification_center::config::{self, Defaults};
use notification_center::notifications::{NotificationState, Notifications, Severity, ShowOptions};
use notification_center::plugin::{self, AppContext, ALIAS, LEGACY_ALIAS, PROVIDE_KEY};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn error_scenario_sets_error_defaults() {
    let notifications = Notifications::new();
    notifications.error("Save failed", ShowOptions::new());

    assert_eq!(
        notifications.snapshot(),
        NotificationState {
            visible: true,
            message: "Save failed".to_string(),
            severity: Severity::Error,
            timeout_ms: 6000,
            icon: Some("mdi-alert-circle".to_string()),
        }
    );
}

#[test]
fn success_scenario_with_custom_timeout() {
    let notifications = Notifications::new();
    notifications.success("Saved", ShowOptions::new().timeout(2000));

    assert_eq!(
        notifications.snapshot(),
        NotificationState {
            visible: true,
            message: "Saved".to_string(),
            severity: Severity::Success,
            timeout_ms: 2000,
            icon: Some("mdi-check-circle".to_string()),
        }
    );
}

#[test]
fn show_scenario_with_custom_color() {
    let notifications = Notifications::new();
    notifications.show("Hi", ShowOptions::new().color("secondary"));

    assert_eq!(
        notifications.snapshot(),
        NotificationState {
            visible: true,
            message: "Hi".to_string(),
            severity: Severity::Custom("secondary".to_string()),
            timeout_ms: 4000,
            icon: None,
        }
    );
}

#[test]
fn explicit_color_overrides_error_tag() {
    let notifications = Notifications::new();
    notifications.error("Odd", ShowOptions::new().color("purple"));

    assert_eq!(notifications.severity().as_str(), "purple");
    assert_eq!(notifications.timeout_ms(), 6000);
    assert_eq!(notifications.icon().as_deref(), Some("mdi-alert-circle"));
}

#[test]
fn renderer_follows_state_through_host_registration() {
    let mut app = AppContext::new();
    plugin::install(&mut app);

    // A renderer injects the handle and records what it would draw.
    let renderer: Notifications = app.inject(PROVIDE_KEY).expect("provided handle");
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    renderer.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    let legacy: Notifications = app.global(LEGACY_ALIAS).expect("legacy alias");
    let current: Notifications = app.global(ALIAS).expect("current alias");
    legacy.info("Syncing", ShowOptions::new());
    current.success("Synced", ShowOptions::new());
    current.hide();
    legacy.hide();

    let frames = frames.borrow();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].message, "Syncing");
    assert_eq!(frames[1].severity, Severity::Success);
    assert!(!frames[2].visible);
    assert_eq!(frames[2].message, "Synced");
}

#[test]
fn snapshot_serializes_with_read_contract_names() {
    let notifications = Notifications::new();
    notifications.warning("Low battery", ShowOptions::new());

    let json = serde_json::to_value(notifications.snapshot()).expect("serialize snapshot");
    assert_eq!(
        json,
        serde_json::json!({
            "visible": true,
            "message": "Low battery",
            "severity": "warning",
            "timeoutMs": 4000,
            "icon": "mdi-alert",
        })
    );

    let back: NotificationState = serde_json::from_value(json).expect("deserialize snapshot");
    assert_eq!(back, notifications.snapshot());
}

#[test]
fn defaults_file_drives_installed_facade() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("notifications.toml");

    let defaults = Defaults {
        timeout_ms: 3000,
        warning_icon: "mdi-alert-octagon".to_string(),
        ..Defaults::default()
    };
    config::save_to_path(&defaults, &path).expect("Failed to write defaults file");
    let loaded = config::load_from_path(&path).expect("Failed to load defaults file");

    let mut app = AppContext::new();
    let notifications = plugin::install_with_defaults(&mut app, loaded);
    notifications.warning("Careful", ShowOptions::new());

    assert_eq!(notifications.timeout_ms(), 3000);
    assert_eq!(notifications.icon().as_deref(), Some("mdi-alert-octagon"));

    dir.close().expect("Failed to close temporary directory");
}
