//! Timestamp helpers for message display.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(feature = "csr")]
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(feature = "csr"))]
#[must_use]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_millis() as f64)
}

/// Format an epoch-milliseconds timestamp as a `HH:MM:SS` clock (UTC).
///
/// Non-finite or negative inputs render as a placeholder rather than
/// wrapping around.
#[must_use]
pub fn format_clock(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() || epoch_ms < 0.0 {
        return "--:--:--".to_owned();
    }

    let total_seconds = (epoch_ms / 1000.0) as u64;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = (total_seconds / 3600) % 24;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
