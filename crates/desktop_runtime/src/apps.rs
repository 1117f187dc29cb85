//! Application registry backed by the build-time catalog in `apps.catalog.toml`.

mod placeholders;

use std::sync::OnceLock;

use leptos::*;
use serde::Deserialize;

use crate::model::{AppId, WindowMeta};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One launchable application.
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Window title and start menu label.
    pub title: String,
    pub icon_id: String,
    /// Shown as a launch button on the taskbar.
    pub pinned: bool,
}

/// Every registered app, in start menu order.
pub fn app_registry() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(APP_CATALOG_JSON).expect("generated app catalog should parse")
    })
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| &entry.app_id == app_id)
}

pub fn pinned_apps() -> Vec<&'static AppDescriptor> {
    app_registry().iter().filter(|entry| entry.pinned).collect()
}

/// Window metadata the shell passes to `open_app` for a registered app.
pub fn launch_meta(app_id: &AppId) -> WindowMeta {
    app_descriptor(app_id)
        .map(|entry| WindowMeta {
            title: Some(entry.title.clone()),
            icon_id: Some(entry.icon_id.clone()),
        })
        .unwrap_or_default()
}

/// Mounts the view for `app_id`, or `None` when the id is not registered.
pub fn mount_app(app_id: &AppId) -> Option<View> {
    let entry = app_descriptor(app_id)?;
    let view = match entry.app_id.as_str() {
        "dashboard" => placeholders::mount_dashboard(),
        "operations" => placeholders::mount_operations(),
        "compliance" => placeholders::mount_compliance(),
        "payments" => placeholders::mount_payments(),
        "marketplace" => placeholders::mount_marketplace(),
        "training" => placeholders::mount_training(),
        "assistant" => placeholders::mount_assistant(),
        "settings" => placeholders::mount_settings(),
        other => {
            logging::debug_warn!("app `{other}` is registered but has no view");
            return None;
        }
    };
    Some(view)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_lists_business_apps_in_menu_order() {
        let ids: Vec<&str> = app_registry().iter().map(|e| e.app_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "dashboard",
                "operations",
                "compliance",
                "payments",
                "marketplace",
                "training",
                "assistant",
                "settings",
            ]
        );
    }

    #[test]
    fn pinned_apps_are_dashboard_operations_and_assistant() {
        let pinned: Vec<&str> = pinned_apps().iter().map(|e| e.app_id.as_str()).collect();
        assert_eq!(pinned, vec!["dashboard", "operations", "assistant"]);
    }

    #[test]
    fn launch_meta_uses_registry_title_and_icon() {
        assert_eq!(
            launch_meta(&AppId::from("marketplace")),
            WindowMeta {
                title: Some("e-Waste Marketplace".to_string()),
                icon_id: Some("store".to_string()),
            }
        );
    }

    #[test]
    fn unknown_apps_have_no_descriptor_or_meta() {
        let unknown = AppId::from("fleet-tracker");
        assert!(app_descriptor(&unknown).is_none());
        assert_eq!(launch_meta(&unknown), WindowMeta::default());
        assert!(mount_app(&unknown).is_none());
    }
}
