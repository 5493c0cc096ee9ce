//! Scoped audio progress timer
//!
//! A running timer sends `RawMsg::PlaybackTick` at a fixed interval. It is a
//! resource: dropping it (or replacing it) cancels the task, so no tick is
//! produced after release.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

#[derive(Debug)]
pub struct PlaybackTimer {
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
    interval: Duration,
}

impl PlaybackTimer {
    /// Must be called inside a tokio runtime.
    pub fn start(interval: Duration, sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if sender.send(RawMsg::PlaybackTick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        log::debug!("playback timer started ({}ms)", interval.as_millis());
        Self {
            cancellation_token,
            task,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        !self.cancellation_token.is_cancelled() && !self.task.is_finished()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        self.task.abort();
        log::debug!("playback timer released");
    }
}
