use crate::{CoreResult, FrameRate};

/// Which way the capturing camera faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraFacing {
    /// Rear camera.
    #[default]
    Back,
    /// Front (selfie) camera. Downstream sinks usually mirror these frames.
    Front,
}

/// Parameters of a recording session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecorderParams {
    /// Target frame rate.
    pub frame_rate: FrameRate,
    /// Camera facing, passed through to every recorded frame.
    pub camera_facing: CameraFacing,
}

impl RecorderParams {
    /// Builds params from a raw frame rate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `frame_rate_hz` is not positive.
    #[track_caller]
    pub fn new(frame_rate_hz: f64, camera_facing: CameraFacing) -> CoreResult<Self> {
        Ok(Self {
            frame_rate: FrameRate::new(frame_rate_hz)?,
            camera_facing,
        })
    }
}
