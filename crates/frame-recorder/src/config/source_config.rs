use crate::config::{default_frame_rate_hz, default_jitter_ms, default_payload_bytes};

use serde::{Deserialize, Serialize};

/// Synthetic frame source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Rate at which frames are produced.
    #[serde(default = "default_frame_rate_hz")]
    pub frame_rate_hz: f64,

    /// Size of each frame payload.
    #[serde(default = "default_payload_bytes")]
    pub payload_bytes: usize,

    /// Delay added before every other frame, so frames arrive unevenly.
    #[serde(default = "default_jitter_ms")]
    pub jitter_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: default_frame_rate_hz(),
            payload_bytes: default_payload_bytes(),
            jitter_ms: default_jitter_ms(),
        }
    }
}
