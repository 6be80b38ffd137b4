use crate::RecorderStatus;

use frame_recorder_core::{RecorderError, RecorderObserver};
use tokio::sync::watch;
use tracing::{error, info, instrument, trace};

/// Observer that publishes recorder status on a watch channel.
///
/// Runs inside the recorder's owning task; `watch::Sender::send_replace`
/// never blocks, so notifications stay synchronous.
pub struct StatusObserver {
    status_tx: watch::Sender<RecorderStatus>,
}

impl StatusObserver {
    /// Create an observer publishing on `status_tx`.
    pub fn new(status_tx: watch::Sender<RecorderStatus>) -> Self {
        Self { status_tx }
    }

    fn publish(&self, status: RecorderStatus) {
        self.status_tx.send_replace(status);
    }
}

impl RecorderObserver for StatusObserver {
    fn on_initializing(&mut self) {
        self.publish(RecorderStatus::Initializing);
    }

    fn on_started(&mut self) {
        self.publish(RecorderStatus::Recording);
    }

    fn on_stopped(&mut self) {
        self.publish(RecorderStatus::Stopped);
    }

    fn on_frame_recorded(&mut self, recording_nanos: i64) {
        trace!(recording_nanos, "Frame recorded");
        // A good frame after a fault means recording recovered.
        if *self.status_tx.borrow() == RecorderStatus::Faulted {
            self.publish(RecorderStatus::Recording);
        }
    }

    fn on_error(&mut self, error: &RecorderError) {
        error!(error = ?error, "Recorder error");
        self.publish(RecorderStatus::Faulted);
    }
}

/// Log every status change until the recorder goes away.
#[instrument(skip(status_rx))]
pub async fn log_status_changes(mut status_rx: watch::Receiver<RecorderStatus>) {
    while status_rx.changed().await.is_ok() {
        let status = *status_rx.borrow_and_update();
        info!(status = ?status, "Recorder status changed");
    }
}
