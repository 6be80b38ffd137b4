//! Device rotation tracking.
//!
//! Raw sensor readings are snapped to the nearest right angle, with a dead
//! band around the current orientation so a device held near 45 degrees does
//! not flap between portrait and landscape.

use tracing::debug;

/// Extra degrees beyond the halfway point a reading must travel before the
/// orientation changes.
pub(crate) const ORIENTATION_HYSTERESIS_DEGREES: u32 = 5;

/// Last known device orientation, snapped to 0, 90, 180 or 270 degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationTracker {
    degrees: Option<u32>,
}

impl OrientationTracker {
    /// Creates a tracker with no known orientation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a raw sensor reading in degrees.
    ///
    /// `None` means the sensor could not tell (device lying flat). The last
    /// known orientation is kept so pointing the camera at the floor or the
    /// sky after framing a shot does not lose it.
    pub fn update(&mut self, reading: Option<u32>) {
        let Some(reading) = reading else {
            return;
        };
        let reading = reading % 360;

        let rounded = match self.degrees {
            None => round_to_right_angle(reading),
            Some(current) => {
                let dist = reading.abs_diff(current);
                let dist = dist.min(360 - dist);
                if dist >= 45 + ORIENTATION_HYSTERESIS_DEGREES {
                    round_to_right_angle(reading)
                } else {
                    current
                }
            }
        };

        if self.degrees != Some(rounded) {
            debug!(reading, degrees = rounded, "Device orientation changed");
            self.degrees = Some(rounded);
        }
    }

    /// Last known orientation in degrees.
    pub fn degrees(&self) -> Option<u32> {
        self.degrees
    }

    /// True when the device is upright or upside down. Unknown counts as not
    /// portrait.
    pub fn is_portrait(&self) -> bool {
        matches!(self.degrees, Some(0) | Some(180))
    }
}

fn round_to_right_angle(degrees: u32) -> u32 {
    ((degrees + 45) / 90 * 90) % 360
}
