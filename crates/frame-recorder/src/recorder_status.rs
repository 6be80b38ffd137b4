/// Recorder status as published by [`StatusObserver`](crate::StatusObserver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderStatus {
    /// No session open.
    #[default]
    Closed,
    /// Session opened, waiting for recording to start.
    Initializing,
    /// Frames are being recorded.
    Recording,
    /// Recording paused.
    Stopped,
    /// The last frame could not be recorded, or a collaborator failed.
    Faulted,
}
