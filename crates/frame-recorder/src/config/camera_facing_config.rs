use frame_recorder_core::CameraFacing;

use serde::{Deserialize, Serialize};

/// Camera facing as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacingConfig {
    /// Rear camera.
    #[default]
    Back,
    /// Front camera.
    Front,
}

impl From<CameraFacingConfig> for CameraFacing {
    fn from(value: CameraFacingConfig) -> Self {
        match value {
            CameraFacingConfig::Back => CameraFacing::Back,
            CameraFacingConfig::Front => CameraFacing::Front,
        }
    }
}
