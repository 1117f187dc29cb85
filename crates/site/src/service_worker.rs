//! Registers the offline service worker and hands waiting updates the skip-waiting message.

use leptos::logging;
use platform_host::{ServiceWorkerMessage, SERVICE_WORKER_URL};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Starts registration in the background; failures are logged and otherwise ignored.
pub fn register() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = register_worker().await {
            logging::warn!("service worker registration failed: {err}");
        }
    });
}

async fn register_worker() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let container = window.navigator().service_worker();
    let registration = JsFuture::from(container.register(SERVICE_WORKER_URL))
        .await
        .map_err(|err| format!("{err:?}"))?
        .dyn_into::<web_sys::ServiceWorkerRegistration>()
        .map_err(|_| "unexpected registration value".to_string())?;

    if let Some(waiting) = registration.waiting() {
        waiting.post_message(&skip_waiting_message()?).map_err(|err| format!("{err:?}"))?;
        logging::log!("asked waiting service worker to activate");
    }
    Ok(())
}

fn skip_waiting_message() -> Result<JsValue, String> {
    let wire = ServiceWorkerMessage::SkipWaiting.to_json().to_string();
    js_sys::JSON::parse(&wire).map_err(|err| format!("{err:?}"))
}
