//! Desktop shell UI composition: backdrop, window layer and taskbar.

mod a11y;
mod desktop_switcher;
mod notification_center;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    apps,
    model::WindowId,
    window_manager::{managed_windows, LayoutMode, PointerPosition},
};

pub use self::{
    desktop_switcher::desktop_label,
    notification_center::{format_relative_age, unread_badge},
};
pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const GENERATED_BACKGROUND: &str =
    "background-image:radial-gradient(circle at 20% 20%,#66bb6a 0%,transparent 45%),\
     linear-gradient(135deg,#1b5e20 0%,#2e7d32 50%,#a1887f 100%);";

/// Inline style for the desktop backdrop: the wallpaper image, or the generated gradient when
/// no wallpaper is set.
pub fn desktop_background_style(wallpaper: &str) -> String {
    let wallpaper = wallpaper.trim();
    if wallpaper.is_empty() {
        return GENERATED_BACKGROUND.to_string();
    }
    format!(
        "background-image:url('{}');background-size:cover;background-position:center;",
        wallpaper.replace('\'', "%27")
    )
}

/// DOM id of a window frame, also the target of [`crate::RuntimeEffect::FocusWindowInput`].
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

pub(crate) fn focus_window_element(window_id: WindowId) -> bool {
    a11y::focus_element_by_id(&window_dom_id(window_id))
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: f64::from(ev.client_x()),
        y: f64::from(ev.client_y()),
    }
}

#[component]
/// Renders the full desktop shell. Must be placed inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let background = move || desktop_background_style(&state.get().wallpaper);
    let layout = move || match runtime.layout_mode() {
        LayoutMode::Desktop => "desktop",
        LayoutMode::Compact => "compact",
    };

    view! {
        <div id="desktop-shell-root" class="desktop-shell" tabindex="-1" data-layout=layout>
            <main class="desktop-backdrop" style=background>
                <WindowLayer />
            </main>
            <Taskbar />
        </div>
    }
}

#[component]
fn WindowLayer() -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Windows whose app id is not registered stay in the session but mount nothing.
    let mounted = create_memo(move |_| {
        managed_windows(&runtime.state.get())
            .into_iter()
            .filter(|win| apps::app_descriptor(&win.app_id).is_some())
            .map(|win| win.id)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="desktop-window-layer">
            <For each=move || mounted.get() key=|window_id| window_id.0 let:window_id>
                <DesktopWindow window_id=window_id />
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_wallpaper_uses_generated_background() {
        assert_eq!(desktop_background_style(""), GENERATED_BACKGROUND);
        assert_eq!(desktop_background_style("   "), GENERATED_BACKGROUND);
    }

    #[test]
    fn wallpaper_url_becomes_cover_image() {
        assert_eq!(
            desktop_background_style("/wallpapers/green.jpg"),
            "background-image:url('/wallpapers/green.jpg');background-size:cover;background-position:center;"
        );
    }

    #[test]
    fn window_dom_ids_are_stable() {
        assert_eq!(window_dom_id(WindowId(12)), "desktop-window-12");
    }
}
