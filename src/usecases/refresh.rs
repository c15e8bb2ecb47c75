use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuildOutcome {
    Rebuilt,
    /// A poll tick found another rebuild of the same target still running.
    Skipped,
}

#[async_trait]
pub trait Refreshable: Send + Sync + 'static {
    fn name(&self) -> &str;
    /// Called on every poll tick. Must not wait for a rebuild already in flight.
    async fn rebuild(&self) -> RebuildOutcome;
}

enum PollState {
    Stopped,
    Polling(JoinHandle<()>),
}

/// Rebuilds its target on a fixed interval while the owning view is visible.
pub struct RefreshLoop<R: Refreshable> {
    target: Arc<R>,
    state: Mutex<PollState>,
}

impl<R: Refreshable> RefreshLoop<R> {
    pub fn new(target: Arc<R>) -> Self {
        Self {
            target,
            state: Mutex::new(PollState::Stopped),
        }
    }

    pub async fn is_polling(&self) -> bool {
        matches!(*self.state.lock().await, PollState::Polling(_))
    }

    /// Visible starts polling with `interval`; hidden stops the timer at once.
    /// Rebuilds already in flight run to completion.
    pub async fn set_visible(&self, visible: bool, interval: Duration) {
        let mut state = self.state.lock().await;

        if visible {
            if let PollState::Stopped = *state {
                info!(
                    view = self.target.name(),
                    interval_ms = interval.as_millis() as u64,
                    "Starting auto refresh"
                );
                *state = PollState::Polling(spawn_ticker(Arc::clone(&self.target), interval));
            }
        } else if let PollState::Polling(handle) =
            std::mem::replace(&mut *state, PollState::Stopped)
        {
            info!(view = self.target.name(), "Stopping auto refresh");
            handle.abort();
        }
    }
}

impl<R: Refreshable> Drop for RefreshLoop<R> {
    fn drop(&mut self) {
        if let PollState::Polling(handle) = self.state.get_mut() {
            handle.abort();
        }
    }
}

fn spawn_ticker<R: Refreshable>(target: Arc<R>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let target = Arc::clone(&target);
            tokio::spawn(async move {
                if target.rebuild().await == RebuildOutcome::Skipped {
                    debug!(view = target.name(), "Previous rebuild still running, tick skipped");
                }
            });
        }
    })
}
