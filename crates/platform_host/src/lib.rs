//! Host contracts shared by the desktop runtime and the browser entry point.
//!
//! Nothing here depends on the UI layer: clock helpers used to stamp session records and the
//! values the shell shares with its offline service worker.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod offline;
pub mod time;

pub use offline::{ServiceWorkerMessage, APP_SHELL_URL, CACHE_NAME, PRECACHE_URLS, SERVICE_WORKER_URL};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
