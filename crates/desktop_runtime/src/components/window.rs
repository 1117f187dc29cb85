use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, stop_mouse_event, use_desktop_runtime, window_dom_id};
use crate::{
    apps,
    icons::{IconName, IconSize, ShellIcon},
    model::{WindowId, WindowState},
    window_manager::{
        frame_presentation, maximize_toggle_target, title_bar_double_click, DragSession,
        FramePresentation, FrameRect, LayoutMode, ResizeEdge, ResizeSession,
    },
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = store_value(runtime.config());
    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let layout = Signal::derive(move || runtime.layout_mode());
    let presentation = create_memo(move |_| {
        window
            .get()
            .map(|win| frame_presentation(&win, layout.get()))
            .unwrap_or(FramePresentation::Hidden)
    });
    let drag = create_rw_signal(None::<DragSession>);
    let resize = create_rw_signal(None::<ResizeSession>);
    let preview = create_rw_signal(None::<FrameRect>);

    let frame_style = move || {
        let z_index = window.get().map(|win| win.z_index).unwrap_or_default();
        let geometry = match presentation.get() {
            FramePresentation::Hidden => "display:none;".to_string(),
            FramePresentation::Filled => "left:0;top:0;width:100%;height:100%;".to_string(),
            FramePresentation::Floating { position, size, .. } => match preview.get() {
                Some(rect) => rect.to_style(),
                None => format!(
                    "left:{}px;top:{}px;width:{};height:{};",
                    position.x,
                    position.y,
                    size.width.to_css(),
                    size.height.to_css()
                ),
            },
        };
        format!("{geometry}z-index:{z_index};")
    };
    let frame_class = move || {
        let state = runtime.state.get();
        let mut class = String::from("desktop-window");
        if state.is_active(window_id) {
            class.push_str(" active");
        }
        match presentation.get() {
            FramePresentation::Hidden => class.push_str(" minimized"),
            FramePresentation::Filled => class.push_str(" filled"),
            FramePresentation::Floating { .. } => {}
        }
        if drag.get().is_some() || resize.get().is_some() {
            class.push_str(" interacting");
        }
        class
    };
    let title = move || window.get().map(|win| win.title).unwrap_or_default();
    let icon = move || {
        window
            .get()
            .map(|win| IconName::from_icon_id(&win.icon_id))
            .unwrap_or(IconName::AppGeneric)
    };
    let is_maximized = move || {
        window
            .get()
            .is_some_and(|win| win.state == WindowState::Maximized)
    };
    let resizable = move || {
        matches!(
            presentation.get(),
            FramePresentation::Floating {
                resizable: true,
                ..
            }
        )
    };

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = runtime
            .state
            .with_untracked(|state| !(state.is_active(window_id) && state.is_topmost(window_id)));
        if should_focus {
            runtime.store().focus_window(window_id);
        }
    };
    let minimize = move || {
        runtime
            .store()
            .set_window_state(window_id, WindowState::Minimized)
    };
    let close = move || runtime.store().close_app(window_id);
    let toggle_maximize = move || {
        if let Some(win) = window.get_untracked() {
            runtime
                .store()
                .set_window_state(window_id, maximize_toggle_target(win.state));
        }
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        let draggable = matches!(
            presentation.get_untracked(),
            FramePresentation::Floating {
                draggable: true,
                ..
            }
        );
        if !draggable {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        drag.set(Some(DragSession {
            window_id,
            pointer_start: pointer_from_pointer_event(&ev),
            rect_start: FrameRect::of_window(&win, runtime.viewport.get_untracked()),
        }));
    };
    let begin_resize = move |edge: ResizeEdge, ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        resize.set(Some(ResizeSession {
            window_id,
            edge,
            pointer_start: pointer_from_pointer_event(&ev),
            rect_start: FrameRect::of_window(&win, runtime.viewport.get_untracked()),
        }));
    };
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let bounds = runtime.viewport.get_untracked();
        if let Some(session) = drag.get_untracked() {
            preview.set(Some(session.preview(pointer, bounds)));
        } else if let Some(session) = resize.get_untracked() {
            let rect = config.with_value(|config| session.preview(pointer, bounds, config));
            preview.set(Some(rect));
        }
    };
    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let bounds = runtime.viewport.get_untracked();
        let commit = if let Some(session) = drag.get_untracked() {
            Some(session.finish(pointer, bounds))
        } else {
            resize.get_untracked().map(|session| {
                config.with_value(|config| session.finish(pointer, bounds, config))
            })
        };
        if let Some(commit) = commit {
            commit.apply(&runtime.store());
        }
        drag.set(None);
        resize.set(None);
        preview.set(None);
    };
    let on_pointer_cancel = move |_: web_sys::PointerEvent| {
        drag.set(None);
        resize.set(None);
        preview.set(None);
    };
    let on_titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        let target = window
            .get_untracked()
            .and_then(|win| title_bar_double_click(&win, layout.get_untracked()));
        if let Some(target) = target {
            runtime.store().set_window_state(window_id, target);
        }
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            <section
                id=window_dom_id(window_id)
                class=frame_class
                style=frame_style
                tabindex="-1"
                role="dialog"
                aria-label=title
                on:pointerdown=focus
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <header
                    class="titlebar"
                    on:pointerdown=begin_move
                    on:dblclick=on_titlebar_double_click
                >
                    <div class="titlebar-title">
                        <span class="titlebar-app-icon" aria-hidden="true">
                            {move || view! { <ShellIcon icon=icon() size=IconSize::Sm /> }}
                        </span>
                        <span>{title}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            type="button"
                            aria-label="Minimize window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                minimize();
                            }
                        >
                            <ShellIcon icon=IconName::WindowMinimize size=IconSize::Xs />
                        </button>
                        <Show when=move || layout.get() == LayoutMode::Desktop fallback=|| ()>
                            <button
                                type="button"
                                aria-label=move || {
                                    if is_maximized() { "Restore window" } else { "Maximize window" }
                                }
                                on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    toggle_maximize();
                                }
                            >
                                {move || {
                                    let icon = if is_maximized() {
                                        IconName::WindowRestore
                                    } else {
                                        IconName::WindowMaximize
                                    };
                                    view! { <ShellIcon icon=icon size=IconSize::Xs /> }
                                }}
                            </button>
                        </Show>
                        <button
                            type="button"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=window_id />
                </div>
                <Show when=resizable fallback=|| ()>
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| {
                            view! {
                                <div
                                    class=format!("window-resize-handle {}", edge.css_class())
                                    aria-hidden="true"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| begin_resize(edge, ev)
                                />
                            }
                        })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

/// Mounts the app once; later state changes reach it through the runtime context.
#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let contents = runtime
        .state
        .with_untracked(|state| state.window(window_id).map(|win| win.app_id.clone()))
        .and_then(|app_id| apps::mount_app(&app_id))
        .unwrap_or_else(|| ().into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
