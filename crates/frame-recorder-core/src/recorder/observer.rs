use crate::RecorderError;

/// Session lifecycle notifications.
///
/// Calls are made synchronously from whichever context drives the recorder,
/// while that context holds the recorder. Implementations must not call back
/// into a [`SharedRecorder`](crate::SharedRecorder) they are registered with.
pub trait RecorderObserver: Send {
    /// A session was opened and is getting ready to deliver frames.
    fn on_initializing(&mut self) {}

    /// Recording started.
    fn on_started(&mut self) {}

    /// Recording stopped.
    fn on_stopped(&mut self) {}

    /// A frame was handed to the sink with this recording timestamp.
    fn on_frame_recorded(&mut self, _recording_nanos: i64) {}

    /// Something went wrong while recording, or the host reported a fault.
    fn on_error(&mut self, _error: &RecorderError) {}
}
