/// A frame-ready event from the frame source.
#[derive(Debug, Clone)]
pub struct FrameEvent {
    /// Raw frame bytes.
    pub payload: Vec<u8>,
    /// Monotonic arrival time in nanoseconds.
    pub now_nanos: i64,
}
