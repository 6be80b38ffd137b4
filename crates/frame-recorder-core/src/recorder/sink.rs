use crate::{CoreResult, RecordedFrame};

/// Consumer of recorded frames, typically a video encoder.
pub trait FrameSink {
    /// Frame data type produced by the frame source.
    type Payload;

    /// Accepts one frame stamped with the recording time so far.
    ///
    /// # Errors
    ///
    /// Implementations return `SinkFailed` when the frame cannot be taken. The
    /// recorder reports the error to its observer and hands it back to the
    /// caller.
    fn record_frame(&mut self, frame: RecordedFrame<Self::Payload>) -> CoreResult<()>;

    /// Discards everything recorded so far.
    fn clear(&mut self);
}
