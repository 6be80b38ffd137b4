use crate::{CoreResult, FrameRecorder, FrameSink, RecorderError};

use std::sync::{Arc, Mutex};

use tracing::error;

/// Cloneable handle running every recorder operation under one lock.
///
/// For hosts that deliver frames on one thread and control the session from
/// another. Clock, sink and observer are always updated together while the
/// lock is held.
pub struct SharedRecorder<S: FrameSink> {
    inner: Arc<Mutex<FrameRecorder<S>>>,
}

impl<S: FrameSink> SharedRecorder<S> {
    /// Wraps a recorder.
    pub fn new(recorder: FrameRecorder<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(recorder)),
        }
    }

    /// Runs `f` with exclusive access to the recorder.
    ///
    /// A poisoned lock is recovered: every recorder operation finishes its
    /// state updates before calling out to the sink or observer, so a panic
    /// in either leaves the recorder consistent.
    pub fn with<R>(&self, f: impl FnOnce(&mut FrameRecorder<S>) -> R) -> R {
        let mut recorder = self.inner.lock().unwrap_or_else(|e| {
            error!("Recorder lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        f(&mut recorder)
    }

    /// See [`FrameRecorder::start_recording`].
    pub fn start_recording(&self) -> bool {
        self.with(|recorder| recorder.start_recording())
    }

    /// See [`FrameRecorder::stop_recording`].
    pub fn stop_recording(&self) -> bool {
        self.with(|recorder| recorder.stop_recording())
    }

    /// See [`FrameRecorder::clear`].
    pub fn clear(&self) {
        self.with(|recorder| recorder.clear())
    }

    /// See [`FrameRecorder::on_frame_ready`].
    #[track_caller]
    pub fn on_frame_ready(&self, payload: S::Payload, now_nanos: i64) -> CoreResult<Option<i64>> {
        let mut recorder = self.inner.lock().unwrap_or_else(|e| {
            error!("Recorder lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        recorder.on_frame_ready(payload, now_nanos)
    }

    /// See [`FrameRecorder::report_fault`].
    pub fn report_fault(&self, fault: &RecorderError) {
        self.with(|recorder| recorder.report_fault(fault))
    }

    /// See [`FrameRecorder::is_recording`].
    pub fn is_recording(&self) -> bool {
        self.with(|recorder| recorder.is_recording())
    }

    /// See [`FrameRecorder::recording_nanos`].
    pub fn recording_nanos(&self) -> i64 {
        self.with(|recorder| recorder.recording_nanos())
    }
}

impl<S: FrameSink> Clone for SharedRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
