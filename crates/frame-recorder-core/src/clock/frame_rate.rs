use crate::{CoreResult, RecorderError};

use std::panic::Location;

use error_location::ErrorLocation;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Frame rate used until a session configures its own.
pub const DEFAULT_FRAME_RATE_HZ: f64 = 30.0;

const DEFAULT_INTERVAL_NANOS: i64 = NANOS_PER_SECOND / 30;

/// Validated target frame rate together with its nominal frame interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    hz: f64,
    interval_nanos: i64,
}

impl FrameRate {
    /// Creates a frame rate, deriving the nominal interval as `1e9 / hz`
    /// truncated to whole nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::InvalidConfig`] if `hz` is not a finite positive
    /// number, or is so large that the interval truncates to zero.
    #[track_caller]
    pub fn new(hz: f64) -> CoreResult<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(RecorderError::InvalidConfig {
                reason: format!("Frame rate must be a positive number, got {}", hz),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let interval_nanos = (NANOS_PER_SECOND as f64 / hz) as i64;

        if interval_nanos < 1 {
            return Err(RecorderError::InvalidConfig {
                reason: format!("Frame rate {} Hz leaves no whole nanosecond per frame", hz),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { hz, interval_nanos })
    }

    /// Target frames per second.
    pub fn hz(&self) -> f64 {
        self.hz
    }

    /// Nominal time between frames in nanoseconds.
    pub fn interval_nanos(&self) -> i64 {
        self.interval_nanos
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self {
            hz: DEFAULT_FRAME_RATE_HZ,
            interval_nanos: DEFAULT_INTERVAL_NANOS,
        }
    }
}
