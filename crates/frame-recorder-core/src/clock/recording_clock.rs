use crate::{CoreResult, clock::FrameRate};

use tracing::{debug, instrument, warn};

/// Elapsed-recording-time accumulator driven by frame-ready events.
///
/// The clock only advances while recording. Within a run, each frame adds the
/// time since the previous frame. The first frame of a run has no previous
/// sample to measure against: a brand-new recording adds nothing, while a
/// resumed recording adds one nominal frame interval in place of the
/// unmeasurable gap, so paused time is never charged to the recording.
///
/// # Thread Safety
///
/// `RecordingClock` is NOT thread-safe. Several fields are updated together
/// on every call, so hosts that drive it from more than one thread must guard
/// every operation with one lock (see [`crate::SharedRecorder`]) or confine it
/// to a single task.
#[derive(Debug, Clone, Default)]
pub struct RecordingClock {
    frame_rate: FrameRate,
    is_recording: bool,
    accumulated_nanos: i64,
    last_update_nanos: Option<i64>,
}

impl RecordingClock {
    /// Creates a stopped clock at zero with the given frame rate.
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    /// Sets the target frame rate used for the resume estimate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a non-positive rate. The previous frame rate
    /// is kept in that case.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn configure(&mut self, frame_rate_hz: f64) -> CoreResult<()> {
        self.set_frame_rate(FrameRate::new(frame_rate_hz)?);
        Ok(())
    }

    /// Sets an already validated frame rate.
    pub fn set_frame_rate(&mut self, frame_rate: FrameRate) {
        self.frame_rate = frame_rate;
        debug!(
            frame_rate_hz = frame_rate.hz(),
            interval_nanos = frame_rate.interval_nanos(),
            "Frame rate configured"
        );
    }

    /// Begins accumulating. Returns `false` if already recording.
    pub fn start(&mut self) -> bool {
        if self.is_recording {
            return false;
        }

        self.is_recording = true;
        self.last_update_nanos = None;

        debug!(
            accumulated_nanos = self.accumulated_nanos,
            "Recording clock started"
        );

        true
    }

    /// Halts accumulation, keeping the time recorded so far. Returns `false`
    /// if not recording.
    pub fn stop(&mut self) -> bool {
        if !self.is_recording {
            return false;
        }

        self.is_recording = false;

        debug!(
            accumulated_nanos = self.accumulated_nanos,
            "Recording clock stopped"
        );

        true
    }

    /// Resets recorded time to zero. Does not change the recording flag.
    pub fn clear(&mut self) {
        self.accumulated_nanos = 0;
        self.last_update_nanos = None;

        debug!("Recording clock cleared");
    }

    /// Advances the clock for a frame that arrived at `now_nanos` and returns
    /// the total recorded time.
    ///
    /// `now_nanos` must come from a monotonic source. A sample earlier than the
    /// previous one contributes nothing rather than rewinding the clock.
    pub fn on_frame_ready(&mut self, now_nanos: i64) -> i64 {
        if !self.is_recording {
            return self.accumulated_nanos;
        }

        let advance = match self.last_update_nanos {
            None if self.accumulated_nanos > 0 => self.frame_rate.interval_nanos(),
            None => 0,
            Some(last_nanos) => {
                let delta = now_nanos.saturating_sub(last_nanos);
                if delta < 0 {
                    warn!(
                        now_nanos,
                        last_nanos, "Frame timestamp went backwards, clamping delta to zero"
                    );
                    0
                } else {
                    delta
                }
            }
        };

        self.accumulated_nanos = self.accumulated_nanos.saturating_add(advance);
        self.last_update_nanos = Some(now_nanos);

        self.accumulated_nanos
    }

    /// Whether frame-ready events are currently processed.
    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    /// Total recorded time in nanoseconds.
    pub fn accumulated_nanos(&self) -> i64 {
        self.accumulated_nanos
    }

    /// Instant of the last processed frame in this run, if any.
    pub fn last_update_nanos(&self) -> Option<i64> {
        self.last_update_nanos
    }

    /// Nominal frame interval in nanoseconds.
    pub fn nominal_frame_interval_nanos(&self) -> i64 {
        self.frame_rate.interval_nanos()
    }

    /// Currently configured frame rate.
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }
}
