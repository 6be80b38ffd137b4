//! Synthetic frame source.
//!
//! Stands in for a camera preview callback: emits a frame-ready event with a
//! fixed-size payload at the configured rate, optionally delaying every other
//! frame so the recorder sees irregular spacing.

use crate::FrameEvent;

use std::time::Duration;

use frame_recorder_core::monotonic_nanos;
use tokio::{
    sync::{mpsc, watch},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, instrument};

/// Paced producer of [`FrameEvent`]s.
pub struct FrameSource {
    period: Duration,
    jitter: Duration,
    payload_bytes: usize,
    frame_tx: mpsc::Sender<FrameEvent>,
}

impl FrameSource {
    /// Create a source emitting one frame every `period`.
    ///
    /// A `jitter` at least as long as `period` lowers the effective rate;
    /// `Config::validate` rejects such configs. Shutdown is observed during
    /// the jitter delay too.
    pub fn new(
        period: Duration,
        jitter: Duration,
        payload_bytes: usize,
        frame_tx: mpsc::Sender<FrameEvent>,
    ) -> Self {
        Self {
            period,
            jitter,
            payload_bytes,
            frame_tx,
        }
    }

    /// Produce frames until shutdown is signalled or the receiver is gone.
    ///
    /// Returns the number of frames delivered.
    #[instrument(skip(self, shutdown_rx), fields(period_ms = self.period.as_millis()))]
    pub async fn run(self, mut shutdown_rx: watch::Receiver<bool>) -> u64 {
        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut frame_index: u64 = 0;

        info!("Frame source started");

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!(frames = frame_index, "Frame source shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if frame_index % 2 == 1 && !self.jitter.is_zero() {
                        tokio::select! {
                            _ = shutdown_rx.changed() => {
                                info!(frames = frame_index, "Frame source shutting down");
                                break;
                            }
                            _ = time::sleep(self.jitter) => {}
                        }
                    }

                    let event = FrameEvent {
                        // Low byte of the index, so consecutive payloads differ.
                        payload: vec![(frame_index & 0xff) as u8; self.payload_bytes],
                        now_nanos: monotonic_nanos(),
                    };

                    if self.frame_tx.send(event).await.is_err() {
                        debug!(frames = frame_index, "Frame receiver closed");
                        break;
                    }

                    frame_index += 1;
                }
            }
        }

        frame_index
    }
}
