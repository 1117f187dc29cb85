#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod service_worker;
mod web_app;

pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    service_worker::register();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
