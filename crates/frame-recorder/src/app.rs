use crate::{AppCommand, AppResult, FrameEvent, SinkStats, StatsSink};

use frame_recorder_core::{FrameRecorder, RecorderParams};
use tokio::sync::{mpsc, watch};
use tracing::{info, instrument, warn};

/// Main application state.
///
/// Owns the recorder exclusively. Frame events and operator commands both
/// arrive over channels and are handled one at a time on this task, so the
/// recorder never needs a lock.
pub struct App {
    pub(crate) recorder: FrameRecorder<StatsSink>,
    pub(crate) params: RecorderParams,
    /// Sink for the session; clones share its totals.
    pub(crate) sink: StatsSink,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) frame_rx: mpsc::Receiver<FrameEvent>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    ///
    /// Returns the sink totals of the session.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<SinkStats> {
        info!("Frame-Recorder starting");

        self.recorder.open(self.params, self.sink.clone());

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }

                Some(frame) = self.frame_rx.recv() => {
                    // Failures already reached the observer; keep recording.
                    if let Err(e) = self.recorder.on_frame_ready(frame.payload, frame.now_nanos) {
                        warn!(error = ?e, "Frame dropped");
                    }
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        let stats = self.sink.snapshot();

        self.recorder.close();

        let _ = self.shutdown_tx.send(true);

        info!(
            frames = stats.frames,
            bytes = stats.bytes,
            recording_ms = stats.last_recording_nanos.unwrap_or(0) / 1_000_000,
            "Frame-Recorder shut down successfully"
        );

        Ok(stats)
    }

    /// Apply one command. Returns `false` on shutdown.
    #[instrument(skip(self))]
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::StartRecording { session_id } => {
                if self.recorder.start_recording() {
                    info!(
                        session_id = %session_id,
                        recording_nanos = self.recorder.recording_nanos(),
                        "Take started"
                    );
                } else {
                    warn!(session_id = %session_id, "Already recording");
                }
            }
            AppCommand::StopRecording { session_id } => {
                if self.recorder.stop_recording() {
                    info!(
                        session_id = %session_id,
                        recording_nanos = self.recorder.recording_nanos(),
                        "Take stopped"
                    );
                } else {
                    warn!(session_id = %session_id, "Not recording");
                }
            }
            AppCommand::Clear => {
                self.recorder.clear();
            }
            AppCommand::Orientation { degrees } => {
                self.recorder.on_orientation_changed(degrees);
            }
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                return false;
            }
        }

        true
    }
}
