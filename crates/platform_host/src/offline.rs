//! Offline caching contract shared between the shell and its service worker.
//!
//! The worker is the static script `crates/site/public/sw.js`. This module holds the values the
//! shell and the script must agree on; the site's asset tests check the script against them.

use serde_json::{json, Value};

/// Versioned cache name. Bumping the suffix invalidates every older cache on activation.
pub const CACHE_NAME: &str = "suitewaste-os-v1";
/// Script URL registered by the shell.
pub const SERVICE_WORKER_URL: &str = "/sw.js";
/// App-shell entry served to navigations when the network is gone.
pub const APP_SHELL_URL: &str = "/index.html";
/// URLs cached at install time.
pub const PRECACHE_URLS: [&str; 4] = ["/", APP_SHELL_URL, "/icons/suitewaste.svg", "/manifest.webmanifest"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Control messages the page posts to the worker.
pub enum ServiceWorkerMessage {
    /// Activate a waiting worker immediately.
    SkipWaiting,
}

impl ServiceWorkerMessage {
    /// Value of the `type` field the worker switches on.
    pub fn wire_type(self) -> &'static str {
        match self {
            Self::SkipWaiting => "SKIP_WAITING",
        }
    }

    /// Serializes the message as posted to the worker.
    pub fn to_json(self) -> Value {
        json!({ "type": self.wire_type() })
    }
}
