//! Frame-recorder Core Library
//!
//! Paces camera frames into a video sink, stamping each with the elapsed
//! recording time. Recording can be paused and resumed without the paused
//! time counting towards the recording.
//!
//! # Example
//!
//! ```
//! use frame_recorder_core::{
//!     CameraFacing, CoreResult, FrameRecorder, FrameSink, RecordedFrame, RecorderParams,
//! };
//!
//! struct Timestamps(Vec<i64>);
//!
//! impl FrameSink for Timestamps {
//!     type Payload = Vec<u8>;
//!
//!     fn record_frame(&mut self, frame: RecordedFrame<Vec<u8>>) -> CoreResult<()> {
//!         self.0.push(frame.recording_nanos);
//!         Ok(())
//!     }
//!
//!     fn clear(&mut self) {
//!         self.0.clear();
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let mut recorder = FrameRecorder::new();
//!     recorder.open(RecorderParams::new(30.0, CameraFacing::Back)?, Timestamps(Vec::new()));
//!
//!     recorder.start_recording();
//!     recorder.on_frame_ready(vec![0; 16], 1_000)?;
//!     recorder.on_frame_ready(vec![0; 16], 1_000 + 33_333_333)?;
//!
//!     assert_eq!(recorder.recording_nanos(), 33_333_333);
//!     Ok(())
//! }
//! ```

mod clock;
mod error;
mod orientation;
mod recorder;

pub use {
    clock::{
        DEFAULT_FRAME_RATE_HZ, FrameRate, NANOS_PER_SECOND, RecordingClock, monotonic_nanos,
    },
    error::RecorderError,
    error::Result as CoreResult,
    orientation::OrientationTracker,
    recorder::{
        CameraFacing, FrameRecorder, FrameSink, RecordedFrame, RecorderObserver, RecorderParams,
        SharedRecorder,
    },
};
