use crate::config::{CameraFacingConfig, default_frame_rate_hz};

use serde::{Deserialize, Serialize};

/// Recording session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Target frame rate for the recording clock.
    #[serde(default = "default_frame_rate_hz")]
    pub frame_rate_hz: f64,

    /// Camera facing stamped onto every recorded frame.
    #[serde(default)]
    pub camera_facing: CameraFacingConfig,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: default_frame_rate_hz(),
            camera_facing: CameraFacingConfig::default(),
        }
    }
}
