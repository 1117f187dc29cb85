//! Runtime effect-queue executor for store-emitted side effects.

use leptos::*;

use crate::{
    components::{focus_window_element, window_dom_id},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// Installs the effect executor that drains store-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running effects so nested operations enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        // Wait a frame so a newly opened window has been rendered.
        RuntimeEffect::FocusWindowInput(window_id) => request_animation_frame(move || {
            if !focus_window_element(window_id) {
                logging::debug_warn!("no focus target for {}", window_dom_id(window_id));
            }
        }),
    }
}
