/// A frame handed to the [`FrameSink`](crate::FrameSink) while recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame<P> {
    /// Opaque frame data from the frame source.
    pub payload: P,
    /// Recording time so far, used as the frame's presentation timestamp.
    pub recording_nanos: i64,
    /// Device orientation latched when recording started.
    pub is_portrait: bool,
    /// Whether the session captures from a front-facing camera.
    pub is_front_facing: bool,
}
