use leptos::*;

use super::{
    a11y::{focus_first_menu_item, handle_menu_roving_keydown},
    use_desktop_runtime, DesktopRuntimeContext,
};
use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
    model::AppId,
};

pub(super) const START_MENU_ID: &str = "desktop-start-menu";

/// Opens or focuses `app_id` with its registry title and icon.
pub(super) fn launch_app(runtime: DesktopRuntimeContext, app_id: &AppId) {
    runtime
        .store()
        .open_app(app_id.clone(), Some(apps::launch_meta(app_id)));
}

#[component]
pub(super) fn StartMenu(on_close: Callback<()>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    request_animation_frame(|| {
        let _ = focus_first_menu_item(START_MENU_ID);
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
            return;
        }
        handle_menu_roving_keydown(&ev, START_MENU_ID);
    };

    view! {
        <div class="start-menu-scrim" on:pointerdown=move |_| on_close.call(())></div>
        <div
            id=START_MENU_ID
            class="start-menu"
            role="menu"
            aria-label="Applications"
            on:keydown=on_keydown
        >
            <p class="start-menu-heading">"SuiteWaste OS"</p>
            <div class="start-menu-grid">
                {apps::app_registry()
                    .iter()
                    .map(|app| {
                        let app_id = app.app_id.clone();
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                id=format!("start-menu-item-{}", app.app_id)
                                class="start-menu-item"
                                on:click=move |_| {
                                    launch_app(runtime, &app_id);
                                    on_close.call(());
                                }
                            >
                                <ShellIcon icon=IconName::from_icon_id(&app.icon_id) size=IconSize::Lg />
                                <span>{app.title.clone()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
