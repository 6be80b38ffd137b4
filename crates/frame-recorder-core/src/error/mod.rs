use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// Requested configuration cannot be honoured (e.g. non-positive frame rate).
    #[error("Invalid configuration: {reason} {location}")]
    InvalidConfig {
        /// Description of the rejected value.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A frame arrived while recording but no session is open.
    #[error("No recording session is open {location}")]
    NotOpen {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The frame sink rejected a frame.
    #[error("Frame sink failed: {reason} {location}")]
    SinkFailed {
        /// Description of the sink failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Fault reported by a host collaborator (camera, preview surface, ...).
    ///
    /// The recorder never raises this itself; it only forwards it.
    #[error("Collaborator fault: {source} {location}")]
    Collaborator {
        /// Underlying fault as reported by the host.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;

impl RecorderError {
    /// Wraps a host-side fault for forwarding to the observer.
    #[track_caller]
    pub fn collaborator<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        RecorderError::Collaborator {
            source: source.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
