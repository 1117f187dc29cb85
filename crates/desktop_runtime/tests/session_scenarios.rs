use std::{cell::RefCell, rc::Rc};

use desktop_runtime::{
    taskbar_entries, AppId, NotificationDraft, SessionConfig, SessionState, SessionStore,
    WindowId, WindowState,
};

fn store() -> SessionStore {
    SessionStore::with_seed(SessionConfig::default(), 42)
}

fn window_for(store: &SessionStore, app: &str) -> WindowId {
    store.with_state(|state| {
        state
            .window_for_app_on_current_desktop(&AppId::from(app))
            .map(|win| win.id)
            .expect("window for app")
    })
}

fn max_z(state: &SessionState) -> u32 {
    state.windows.iter().map(|win| win.z_index).max().unwrap_or(0)
}

#[test]
fn reopening_an_app_focuses_the_existing_window() {
    let store = store();
    let desktop_id = store.with_state(|state| state.current_desktop_id);

    store.open_app("dashboard", None);
    let state = store.snapshot();
    assert_eq!(state.windows.len(), 1);
    let win = &state.windows[0];
    assert_eq!(win.app_id, AppId::from("dashboard"));
    assert_eq!(win.state, WindowState::Normal);
    assert_eq!(win.desktop_id, desktop_id);
    assert_eq!(state.active_window_id, Some(win.id));

    store.open_app("dashboard", None);
    let state = store.snapshot();
    assert_eq!(state.windows.len(), 1);
    assert_eq!(state.active_window_id, Some(state.windows[0].id));
    assert!(state.is_topmost(state.windows[0].id));
}

#[test]
fn focusing_a_background_window_raises_it_above_everything() {
    let store = store();
    store.open_app("dashboard", None);
    store.open_app("operations", None);
    let dashboard = window_for(&store, "dashboard");
    let operations = window_for(&store, "operations");

    let before = store.snapshot();
    let dashboard_z = before.window(dashboard).expect("dashboard").z_index;
    let operations_z = before.window(operations).expect("operations").z_index;
    assert_eq!(operations_z, dashboard_z + 1);

    store.focus_window(dashboard);
    let after = store.snapshot();
    assert_eq!(after.window(dashboard).expect("dashboard").z_index, operations_z + 1);
    assert_eq!(after.active_window_id, Some(dashboard));
}

#[test]
fn removing_the_current_desktop_moves_its_windows_to_the_fallback() {
    let store = store();
    let first = store.with_state(|state| state.current_desktop_id);
    store.add_desktop();
    let second = store.with_state(|state| state.current_desktop_id);
    assert_ne!(first, second);

    store.open_app("training", None);
    let training = window_for(&store, "training");
    store.remove_desktop(second);

    let state = store.snapshot();
    assert_eq!(state.desktops.len(), 1);
    assert!(state.desktop(second).is_none());
    assert_eq!(state.current_desktop_id, first);
    assert_eq!(state.window(training).expect("training").desktop_id, first);
}

#[test]
fn closing_a_window_never_activates_a_minimized_one() {
    let store = store();
    store.open_app("dashboard", None);
    store.open_app("operations", None);
    let dashboard = window_for(&store, "dashboard");
    let operations = window_for(&store, "operations");

    store.set_window_state(operations, WindowState::Minimized);
    let state = store.snapshot();
    assert_eq!(state.active_window_id, None);
    let entry = taskbar_entries(&state)
        .into_iter()
        .find(|entry| entry.window_id == operations)
        .expect("taskbar entry");
    assert!(!entry.active);

    store.close_app(dashboard);
    let state = store.snapshot();
    assert_eq!(state.active_window_id, None);
    assert_eq!(
        state.window(operations).expect("operations").state,
        WindowState::Minimized
    );
}

#[test]
fn repeated_opens_keep_one_window_per_app_and_desktop() {
    let store = store();
    for app in ["dashboard", "payments", "dashboard", "payments", "dashboard"] {
        store.open_app(app, None);
    }
    store.add_desktop();
    store.open_app("dashboard", None);
    store.open_app("dashboard", None);

    let state = store.snapshot();
    for desktop in &state.desktops {
        let dashboards = state
            .windows
            .iter()
            .filter(|win| win.desktop_id == desktop.id && win.app_id.as_str() == "dashboard")
            .count();
        assert_eq!(dashboards, 1);
    }
    assert_eq!(state.windows.len(), 3);
}

#[test]
fn z_order_grows_and_the_latest_focus_is_topmost() {
    let store = store();
    let mut last_max = 0;
    let mut check = |store: &SessionStore, expected_top: WindowId| {
        let state = store.snapshot();
        let top = max_z(&state);
        assert!(top > last_max);
        last_max = top;
        assert!(state.is_topmost(expected_top));
    };

    store.open_app("dashboard", None);
    let dashboard = window_for(&store, "dashboard");
    check(&store, dashboard);
    store.open_app("compliance", None);
    let compliance = window_for(&store, "compliance");
    check(&store, compliance);
    store.focus_window(dashboard);
    check(&store, dashboard);
    store.set_window_state(compliance, WindowState::Maximized);
    check(&store, compliance);
    store.toggle_taskbar_window(dashboard);
    check(&store, dashboard);
}

#[test]
fn the_last_desktop_cannot_be_removed() {
    let store = store();
    let only = store.with_state(|state| state.current_desktop_id);
    let changes = Rc::new(RefCell::new(0));
    let seen = changes.clone();
    store.subscribe(move |_, _| *seen.borrow_mut() += 1);

    store.remove_desktop(only);
    assert_eq!(*changes.borrow(), 0);
    assert_eq!(store.with_state(|state| state.desktops.len()), 1);
}

#[test]
fn business_apps_talk_to_the_session_through_notifications_and_app_state() {
    let store = SessionStore::with_clock(SessionConfig::default(), 1, || 1_700_000_000_000);
    store.add_notification(NotificationDraft {
        app_id: AppId::from("operations"),
        icon_id: "map".to_string(),
        title: "Route dispatched".to_string(),
        message: "Route R-102 is on its way".to_string(),
    });
    store.update_app_state("operations", serde_json::json!({ "dispatched": ["R-102"] }));
    store.update_app_state("operations", serde_json::json!({ "filter": "today" }));

    let state = store.snapshot();
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].timestamp_ms, 1_700_000_000_000);
    assert_eq!(
        state.app_state(&AppId::from("operations")),
        Some(&serde_json::json!({ "dispatched": ["R-102"], "filter": "today" }))
    );
}
