use uuid::Uuid;

/// Commands sent from the control handler to the main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Start (or resume) recording.
    StartRecording {
        /// Unique session ID for this take.
        session_id: Uuid,
    },
    /// Stop (pause) recording.
    StopRecording {
        /// Session ID of the take to stop.
        session_id: Uuid,
    },
    /// Discard everything recorded so far.
    Clear,
    /// New device orientation reading; `None` when unknown.
    Orientation {
        /// Raw reading in degrees.
        degrees: Option<u32>,
    },
    /// Request application shutdown.
    Shutdown,
}
