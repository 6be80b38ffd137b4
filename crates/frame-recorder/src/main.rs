//! Frame-Recorder: paced frame recording with pause/resume from the terminal.

mod app;
mod app_command;
mod config;
mod control_handler;
mod control_input;
mod error;
mod frame_event;
mod frame_source;
mod recorder_status;
mod recording_state;
mod stats_sink;
mod status_observer;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    control_handler::ControlHandler,
    control_input::ControlInput,
    error::{AppError, Result as AppResult},
    frame_event::FrameEvent,
    frame_source::FrameSource,
    recorder_status::RecorderStatus,
    recording_state::RecordingState,
    stats_sink::{SinkStats, StatsSink},
    status_observer::StatusObserver,
};

use crate::config::Config;

use std::time::Duration;

use frame_recorder_core::FrameRecorder;
use tokio::sync::{mpsc, watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            // Tracing is not up yet; fall back to the default filter.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(config::DEFAULT_LOG_FILTER))
                .init();
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let code = match rt.block_on(run(config)) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = ?e, "App error");
            1
        }
    };

    // The stdin forwarder may still be parked in a blocking read.
    rt.shutdown_timeout(Duration::from_secs(1));

    std::process::exit(code);
}

/// Wire up the recorder task, control handler and frame source, and run them
/// until shutdown.
async fn run(config: Config) -> AppResult<()> {
    let params = config.recorder_params()?;
    let period = config.source_frame_period()?;

    let (command_tx, command_rx) = mpsc::channel(32);
    let (frame_tx, frame_rx) = mpsc::channel(64);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let (status_tx, status_rx) = watch::channel(RecorderStatus::default());

    let mut recorder = FrameRecorder::new();
    recorder.set_observer(Box::new(StatusObserver::new(status_tx)));

    let app = App {
        recorder,
        params,
        sink: StatsSink::new(),
        command_rx,
        frame_rx,
        shutdown_tx,
    };

    let control_handler = ControlHandler::new(command_tx);

    let frame_source = FrameSource::new(
        period,
        Duration::from_millis(config.source.jitter_ms),
        config.source.payload_bytes,
        frame_tx,
    );

    let (app_result, control_result, frames_sent, ()) = tokio::join!(
        app.run(),
        control_handler.run(shutdown_rx.clone()),
        frame_source.run(shutdown_rx),
        status_observer::log_status_changes(status_rx),
    );

    if let Err(e) = control_result {
        error!(error = ?e, "Control handler error");
    }

    let stats = app_result?;

    info!(
        frames_sent,
        frames_recorded = stats.frames,
        portrait_frames = stats.portrait_frames,
        "Session summary"
    );

    Ok(())
}
