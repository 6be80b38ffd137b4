mod frame_rate;
mod monotonic;
mod recording_clock;

pub use {
    frame_rate::{DEFAULT_FRAME_RATE_HZ, FrameRate, NANOS_PER_SECOND},
    monotonic::monotonic_nanos,
    recording_clock::RecordingClock,
};
