use std::time::Duration;

/// Shortest tick allowed, to keep the event loop from spinning
pub const MIN_TICK_MS: u64 = 50;

/// Get tick duration
pub fn tick_duration(tick_ms: u64) -> Duration {
    Duration::from_millis(tick_ms.max(MIN_TICK_MS))
}
