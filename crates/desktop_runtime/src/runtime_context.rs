//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns one [`SessionStore`] and mirrors its state into a Leptos signal through a
//! store subscription. Views read the signal and call store operations; they never mutate the
//! signal directly. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::SessionConfig,
    effect_executor,
    model::SessionState,
    reducer::RuntimeEffect,
    store::SessionStore,
    window_manager::{Bounds, LayoutMode},
};

/// Height reserved for the taskbar below the window layer.
pub const TASKBAR_HEIGHT_PX: f64 = 48.0;

#[derive(Clone, Copy)]
/// Leptos context for reading session state and calling [`SessionStore`] operations.
pub struct DesktopRuntimeContext {
    store: StoredValue<SessionStore>,
    /// Reactive mirror of the store state, updated once per committed operation.
    pub state: RwSignal<SessionState>,
    /// Effects emitted by the store, drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Pixel size of the window layer.
    pub viewport: RwSignal<Bounds>,
}

impl DesktopRuntimeContext {
    /// Returns a handle to the session store.
    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn config(&self) -> SessionConfig {
        self.store.with_value(|store| store.config().clone())
    }

    pub fn layout_mode(&self) -> LayoutMode {
        let width = self.viewport.get().width;
        self.store
            .with_value(|store| LayoutMode::for_viewport_width(width, store.config()))
    }
}

/// Window layer size used when there is no browser window to measure.
const FALLBACK_WINDOW_LAYER: Bounds = Bounds {
    width: 1280.0,
    height: 720.0 - TASKBAR_HEIGHT_PX,
};

/// Window layer size for a browser window of `inner` CSS pixels.
fn layer_bounds_for(inner: Option<(f64, f64)>) -> Bounds {
    match inner {
        Some((width, height)) => Bounds {
            width: width.max(0.0),
            height: (height - TASKBAR_HEIGHT_PX).max(0.0),
        },
        None => FALLBACK_WINDOW_LAYER,
    }
}

fn window_layer_bounds() -> Bounds {
    let inner = web_sys::window().and_then(|window| {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width, height))
    });
    layer_bounds_for(inner)
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
///
/// Each provider owns an independent session; pass `store` to share one with the caller.
pub fn DesktopProvider(
    #[prop(optional)]
    store: Option<SessionStore>,
    #[prop(optional)]
    config: Option<SessionConfig>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| SessionStore::new(config.unwrap_or_default()));
    let state = create_rw_signal(store.snapshot());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let viewport = create_rw_signal(window_layer_bounds());

    let subscription = store.subscribe(move |next, new_effects| {
        state.set(next.clone());
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend_from_slice(new_effects));
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(window_layer_bounds());
    });

    let runtime = DesktopRuntimeContext {
        store: store_value(store.clone()),
        state,
        effects,
        viewport,
    };

    on_cleanup(move || {
        resize_listener.remove();
        store.unsubscribe(subscription);
    });

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn taskbar_height_is_taken_off_the_window_layer() {
        assert_eq!(
            layer_bounds_for(Some((1024.0, 768.0))),
            Bounds {
                width: 1024.0,
                height: 720.0,
            }
        );
        assert_eq!(layer_bounds_for(Some((320.0, 20.0))).height, 0.0);
    }

    #[test]
    fn unmeasurable_window_falls_back_to_a_desktop_sized_layer() {
        let config = SessionConfig::default();
        let mut narrow = config.clone();
        narrow.compact_breakpoint_px = 2_000.0;

        assert_eq!(layer_bounds_for(None), FALLBACK_WINDOW_LAYER);
        assert_eq!(
            LayoutMode::for_viewport_width(layer_bounds_for(None).width, &config),
            LayoutMode::Desktop
        );
        assert_eq!(
            LayoutMode::for_viewport_width(layer_bounds_for(None).width, &narrow),
            LayoutMode::Compact
        );
    }
}
