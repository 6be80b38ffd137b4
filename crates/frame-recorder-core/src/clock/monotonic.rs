use std::{sync::OnceLock, time::Instant};

static START_INSTANT: OnceLock<Instant> = OnceLock::new();

#[inline]
fn start_instant() -> Instant {
    *START_INSTANT.get_or_init(Instant::now)
}

/// Monotonic nanoseconds since the first call in this process.
///
/// Saturates at `i64::MAX` (roughly 292 years of uptime).
#[inline]
pub fn monotonic_nanos() -> i64 {
    i64::try_from(start_instant().elapsed().as_nanos()).unwrap_or(i64::MAX)
}
