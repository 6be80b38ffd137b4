mod camera_facing_config;
#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod recording_config;
mod source_config;

pub(crate) use {
    camera_facing_config::CameraFacingConfig, config::Config, logging_config::LoggingConfig,
    recording_config::RecordingConfig, source_config::SourceConfig,
};

pub(crate) const DEFAULT_FRAME_RATE_HZ: f64 = frame_recorder_core::DEFAULT_FRAME_RATE_HZ;
pub(crate) const DEFAULT_PAYLOAD_BYTES: usize = 4096;
pub(crate) const DEFAULT_JITTER_MS: u64 = 0;
pub(crate) const DEFAULT_LOG_FILTER: &str = "frame_recorder=debug,frame_recorder_core=debug";

pub(crate) fn default_frame_rate_hz() -> f64 {
    DEFAULT_FRAME_RATE_HZ
}

pub(crate) fn default_payload_bytes() -> usize {
    DEFAULT_PAYLOAD_BYTES
}

pub(crate) fn default_jitter_ms() -> u64 {
    DEFAULT_JITTER_MS
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
