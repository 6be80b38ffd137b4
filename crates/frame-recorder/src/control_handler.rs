//! Operator control handler with recording state machine.
//!
//! Reads commands from stdin and manages recording state transitions. Uses
//! async channels to communicate with the main application.

use crate::{AppCommand, AppError, AppResult, ControlInput, RecordingState};

use std::{
    io::BufRead,
    panic::Location,
    sync::Arc,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Operator control handler with recording state machine.
pub struct ControlHandler {
    pub(crate) state: Arc<Mutex<RecordingState>>,
    command_tx: mpsc::Sender<AppCommand>,
}

impl ControlHandler {
    /// Create a handler sending commands on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordingState::Idle)),
            command_tx,
        }
    }

    /// Run the control loop on stdin.
    ///
    /// Returns when a shutdown signal is received, or after requesting
    /// shutdown on `quit` or end of input.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);

        // Single persistent blocking task that forwards stdin lines.
        //
        // Shutdown: when line_rx is dropped (loop breaks), the next
        // line_tx.blocking_send() fails, breaking the blocking loop. A read
        // already in progress cannot be interrupted; the runtime is shut down
        // with a timeout so it does not wait for it.
        let handle = tokio::task::spawn_blocking(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });

        info!("Controls: r = record/pause, c = clear, o <deg> = orientation, q = quit");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Control handler shutting down");
                    break;
                }
                line = line_rx.recv() => {
                    let Some(line) = line else {
                        info!("End of input, requesting shutdown");
                        self.handle_input(ControlInput::Quit).await?;
                        break;
                    };

                    match ControlInput::parse(&line) {
                        Some(input) => {
                            if !self.handle_input(input).await? {
                                break;
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => warn!(line = %line.trim(), "Unrecognised command"),
                    }
                }
            }
        }

        drop(line_rx);

        match tokio::time::timeout(Duration::from_millis(100), handle).await {
            Ok(Ok(())) => debug!("Stdin forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Stdin forwarder task panicked"),
            Err(_) => debug!(
                "Stdin forwarder still blocked on read, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    /// Act on one operator command. Returns `false` once shutdown has been
    /// requested.
    #[instrument(skip(self))]
    pub async fn handle_input(&self, input: ControlInput) -> AppResult<bool> {
        match input {
            ControlInput::ToggleRecording => self.toggle_recording().await?,
            ControlInput::Clear => self.send(AppCommand::Clear).await?,
            ControlInput::Orientation(degrees) => {
                self.send(AppCommand::Orientation { degrees }).await?
            }
            ControlInput::Quit => {
                self.send(AppCommand::Shutdown).await?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn toggle_recording(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;

        match *state {
            RecordingState::Idle => {
                let session_id = Uuid::new_v4();

                // Send command FIRST -- if this fails, state remains Idle.
                self.send(AppCommand::StartRecording { session_id })
                    .await?;

                *state = RecordingState::Recording {
                    started_at: Instant::now(),
                    session_id,
                };

                info!(session_id = %session_id, "Recording requested");
            }
            RecordingState::Recording {
                started_at,
                session_id,
            } => {
                let duration = started_at.elapsed();

                // Send command FIRST -- if this fails, state remains Recording.
                // The operator can retry.
                self.send(AppCommand::StopRecording { session_id })
                    .await?;

                *state = RecordingState::Idle;

                info!(
                    session_id = %session_id,
                    duration_ms = duration.as_millis(),
                    "Pause requested"
                );
            }
        }

        Ok(())
    }

    // Caller location is captured before the future is built.
    #[track_caller]
    fn send(&self, command: AppCommand) -> impl Future<Output = AppResult<()>> + '_ {
        let location = Location::caller();

        async move {
            self.command_tx
                .send(command)
                .await
                .map_err(|e| AppError::ChannelSendFailed {
                    message: format!("Failed to send {:?}: {}", e.0, e),
                    location: ErrorLocation::from(location),
                })
        }
    }
}
