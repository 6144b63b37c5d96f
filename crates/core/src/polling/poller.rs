use log::{debug, info};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::errors::{Error, Result};

/// Spawns fixed-interval polling loops.
pub struct PollTask;

impl PollTask {
    /// Runs `job` every `period` on the tokio runtime, first tick immediate.
    ///
    /// The loop stops when the returned handle is cancelled or dropped. A job
    /// in flight at cancellation is dropped, so no refresh lands afterwards.
    pub fn spawn<F, Fut>(name: impl Into<String>, period: Duration, mut job: F) -> Result<PollHandle>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if period.is_zero() {
            return Err(Error::InvalidConfigValue(
                "Polling period must be greater than zero".to_string(),
            ));
        }

        let name = name.into();
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let task_name = name.clone();

        let task = tokio::spawn(async move {
            info!("Poller '{}' started ({}s interval)", task_name, period.as_secs_f64());

            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                if *cancel_rx.borrow() {
                    break;
                }
                tokio::select! {
                    biased;
                    // Err means the handle is gone
                    _ = cancel_rx.changed() => break,
                    _ = ticker.tick() => {}
                }

                debug!("Poller '{}' tick", task_name);
                tokio::select! {
                    biased;
                    _ = cancel_rx.changed() => break,
                    _ = job() => {}
                }
            }

            info!("Poller '{}' stopped", task_name);
        });

        Ok(PollHandle {
            name,
            cancel: cancel_tx,
            task: Some(task),
        })
    }
}

/// Handle to a running poller. Dropping it cancels the loop.
pub struct PollHandle {
    name: String,
    cancel: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requests the loop to stop. Idempotent.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// Whether the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Cancels the loop and waits for it to exit.
    pub async fn shutdown(mut self) -> Result<()> {
        self.cancel();
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| Error::Unexpected(format!("Poller '{}' failed: {}", self.name, e)))?;
        }
        Ok(())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
