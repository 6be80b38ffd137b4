use std::time::Instant;

use uuid::Uuid;

/// Recording state for the control handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not currently recording.
    Idle,
    /// Currently recording frames.
    Recording {
        /// When this take started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}
