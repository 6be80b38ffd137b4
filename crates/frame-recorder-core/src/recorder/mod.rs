mod frame;
mod frame_recorder;
mod observer;
mod params;
mod shared;
mod sink;

pub use {
    frame::RecordedFrame,
    frame_recorder::FrameRecorder,
    observer::RecorderObserver,
    params::{CameraFacing, RecorderParams},
    shared::SharedRecorder,
    sink::FrameSink,
};
