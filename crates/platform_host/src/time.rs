//! Clock helpers for stamping session records.

use std::cell::Cell;

thread_local! {
    static LAST_ISSUED_MS: Cell<u64> = const { Cell::new(0) };
}

/// Wall-clock unix time in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    return js_sys::Date::now().max(0.0) as u64;

    #[cfg(not(target_arch = "wasm32"))]
    return std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);
}

/// Smallest timestamp that is not earlier than `now` and strictly after `last_issued`.
fn monotonic_after(last_issued: u64, now: u64) -> u64 {
    if now > last_issued {
        now
    } else {
        last_issued.saturating_add(1)
    }
}

/// Like [`unix_time_ms_now`], but never returns the same value twice on one thread, so
/// notifications raised within the same millisecond keep their creation order.
pub fn next_monotonic_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_ISSUED_MS.with(|cell| {
        let issued = monotonic_after(cell.get(), now);
        cell.set(issued);
        issued
    })
}
