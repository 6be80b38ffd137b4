use crate::{
    CameraFacing, CoreResult, FrameSink, RecordedFrame, RecorderError, RecorderObserver,
    RecorderParams, clock::RecordingClock, orientation::OrientationTracker,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};

/// A recording session: paces frames from a frame source into a frame sink.
///
/// Frames are forwarded only while recording. Each one is stamped with the
/// [`RecordingClock`] reading, the portrait flag latched at the last start, and
/// the session's camera facing.
///
/// # Thread Safety
///
/// FrameRecorder is NOT thread-safe. Drive it from one task, or wrap it in a
/// [`SharedRecorder`](crate::SharedRecorder) so every operation runs under the
/// same lock.
pub struct FrameRecorder<S: FrameSink> {
    clock: RecordingClock,
    params: Option<RecorderParams>,
    sink: Option<S>,
    observer: Option<Box<dyn RecorderObserver>>,
    orientation: OrientationTracker,
    is_portrait: bool,
}

impl<S: FrameSink> FrameRecorder<S> {
    /// Creates a closed recorder with no observer.
    pub fn new() -> Self {
        Self {
            clock: RecordingClock::default(),
            params: None,
            sink: None,
            observer: None,
            orientation: OrientationTracker::new(),
            is_portrait: false,
        }
    }

    /// Registers the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn RecorderObserver>) {
        self.observer = Some(observer);
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Opens a session delivering frames to `sink`.
    ///
    /// Returns `false` without touching anything if a session with equal
    /// params is already open; `sink` is dropped in that case. Otherwise any
    /// current session is closed first. Recorded time is kept across sessions
    /// until [`clear`](Self::clear) is called.
    #[instrument(skip(self, sink))]
    pub fn open(&mut self, params: RecorderParams, sink: S) -> bool {
        if self.sink.is_some() && self.params == Some(params) {
            debug!("Session already open with the same params");
            return false;
        }

        self.close();

        self.clock.set_frame_rate(params.frame_rate);
        self.params = Some(params);
        self.sink = Some(sink);

        info!(
            frame_rate_hz = params.frame_rate.hz(),
            camera_facing = ?params.camera_facing,
            "Recording session opened"
        );

        self.notify(|observer| observer.on_initializing());

        true
    }

    /// Stops recording and releases the sink. No-op when already closed.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        self.stop_recording();

        if self.sink.take().is_some() {
            self.params = None;
            info!("Recording session closed");
        }
    }

    /// Starts recording. Returns `false` if already recording.
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) -> bool {
        if !self.clock.start() {
            return false;
        }

        self.is_portrait = self.orientation.is_portrait();

        info!(
            orientation = ?self.orientation.degrees(),
            is_portrait = self.is_portrait,
            recording_nanos = self.clock.accumulated_nanos(),
            "Recording started"
        );

        self.notify(|observer| observer.on_started());

        true
    }

    /// Stops recording, keeping the recorded time. Returns `false` if not
    /// recording.
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) -> bool {
        if !self.clock.stop() {
            return false;
        }

        info!(
            recording_nanos = self.clock.accumulated_nanos(),
            "Recording stopped"
        );

        self.notify(|observer| observer.on_stopped());

        true
    }

    /// Resets the recorded time to zero and clears the sink.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.clock.clear();

        if let Some(sink) = self.sink.as_mut() {
            sink.clear();
        }

        info!("Recording data cleared");
    }

    /// Feeds a raw orientation reading in degrees; `None` means unknown.
    pub fn on_orientation_changed(&mut self, degrees: Option<u32>) {
        self.orientation.update(degrees);
    }

    /// Handles a frame-ready event from the frame source.
    ///
    /// Returns `Ok(None)` and drops the payload when not recording. Otherwise
    /// advances the clock, hands the frame to the sink, and returns the
    /// frame's recording timestamp.
    ///
    /// # Errors
    ///
    /// Returns `NotOpen` if recording without a session (the clock is left
    /// untouched), or the sink's error if it rejects the frame. Both are also
    /// reported to the observer.
    #[track_caller]
    pub fn on_frame_ready(
        &mut self,
        payload: S::Payload,
        now_nanos: i64,
    ) -> CoreResult<Option<i64>> {
        if !self.clock.is_recording() {
            return Ok(None);
        }

        let sink = match self.sink.as_mut() {
            Some(sink) => sink,
            None => {
                let error = RecorderError::NotOpen {
                    location: ErrorLocation::from(Location::caller()),
                };
                warn!("Frame arrived while recording without an open session");
                self.notify(|observer| observer.on_error(&error));
                return Err(error);
            }
        };

        let recording_nanos = self.clock.on_frame_ready(now_nanos);

        let frame = RecordedFrame {
            payload,
            recording_nanos,
            is_portrait: self.is_portrait,
            is_front_facing: self
                .params
                .is_some_and(|params| params.camera_facing == CameraFacing::Front),
        };

        if let Err(e) = sink.record_frame(frame) {
            error!(recording_nanos, error = ?e, "Error recording frame");
            self.notify(|observer| observer.on_error(&e));
            return Err(e);
        }

        self.notify(|observer| observer.on_frame_recorded(recording_nanos));

        Ok(Some(recording_nanos))
    }

    /// Forwards a host fault (camera unavailable, preview failure, ...) to the
    /// observer unchanged. Recorder state is not touched.
    pub fn report_fault(&mut self, fault: &RecorderError) {
        error!(error = ?fault, "Collaborator fault reported");
        self.notify(|observer| observer.on_error(fault));
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    /// Whether frames are currently recorded.
    pub fn is_recording(&self) -> bool {
        self.clock.is_recording()
    }

    /// Total recorded time in nanoseconds.
    pub fn recording_nanos(&self) -> i64 {
        self.clock.accumulated_nanos()
    }

    /// Arrival instant of the last recorded frame in the current run.
    pub fn last_update_nanos(&self) -> Option<i64> {
        self.clock.last_update_nanos()
    }

    /// The recording clock.
    pub fn clock(&self) -> &RecordingClock {
        &self.clock
    }

    /// Params of the open session.
    pub fn params(&self) -> Option<RecorderParams> {
        self.params
    }

    /// Sink of the open session.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Mutable sink of the open session.
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Last known device orientation.
    pub fn orientation(&self) -> &OrientationTracker {
        &self.orientation
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn RecorderObserver)) {
        if let Some(observer) = self.observer.as_mut() {
            f(observer.as_mut());
        }
    }
}

impl<S: FrameSink> Default for FrameRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}
