//! Frame sink that tallies what it is given instead of encoding it.

use frame_recorder_core::{CoreResult, FrameSink, RecordedFrame, RecorderError};

use std::{
    panic::Location,
    sync::{Arc, Mutex, MutexGuard},
};

use error_location::ErrorLocation;
use tracing::{debug, error};

/// Totals collected by [`StatsSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkStats {
    /// Frames accepted.
    pub frames: u64,
    /// Payload bytes accepted.
    pub bytes: u64,
    /// Frames recorded in portrait orientation.
    pub portrait_frames: u64,
    /// Timestamp of the first accepted frame.
    pub first_recording_nanos: Option<i64>,
    /// Timestamp of the last accepted frame.
    pub last_recording_nanos: Option<i64>,
}

/// Sink that validates frame timestamps like an encoder would and keeps
/// running totals.
///
/// Rejects a frame whose timestamp is earlier than the previous one, since
/// muxers require non-decreasing presentation times.
#[derive(Debug, Clone, Default)]
pub struct StatsSink {
    pub(crate) stats: Arc<Mutex<SinkStats>>,
}

impl StatsSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current totals.
    pub fn snapshot(&self) -> SinkStats {
        *self.lock_recovering()
    }

    // The counters are plain integers, so a poisoned lock is still usable.
    fn lock_recovering(&self) -> MutexGuard<'_, SinkStats> {
        self.stats.lock().unwrap_or_else(|e| {
            error!("Sink stats lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}

impl FrameSink for StatsSink {
    type Payload = Vec<u8>;

    #[track_caller]
    fn record_frame(&mut self, frame: RecordedFrame<Vec<u8>>) -> CoreResult<()> {
        let mut stats = self.stats.lock().map_err(|e| RecorderError::SinkFailed {
            reason: format!("Failed to lock sink stats: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let last = stats.last_recording_nanos.unwrap_or(i64::MIN);
        if frame.recording_nanos < last {
            return Err(RecorderError::SinkFailed {
                reason: format!(
                    "Frame timestamp {} precedes previous timestamp {}",
                    frame.recording_nanos, last
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        stats.frames += 1;
        stats.bytes += frame.payload.len() as u64;
        if frame.is_portrait {
            stats.portrait_frames += 1;
        }
        stats.first_recording_nanos.get_or_insert(frame.recording_nanos);
        stats.last_recording_nanos = Some(frame.recording_nanos);

        if stats.frames % 30 == 0 {
            debug!(
                frames = stats.frames,
                recording_nanos = frame.recording_nanos,
                is_front_facing = frame.is_front_facing,
                "Frames recorded"
            );
        }

        Ok(())
    }

    fn clear(&mut self) {
        *self.lock_recovering() = SinkStats::default();
        debug!("Sink stats cleared");
    }
}
