//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Controls the lifetime of a running reaper.
///
/// Dropping the handle also stops the reaper.
#[derive(Debug)]
#[must_use = "dropping the handle stops the reaper"]
pub struct ReaperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to exit.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            // The reaper may already be gone if the cache was dropped.
            let _ = tx.send(());
        }

        if let Err(err) = (&mut self.task).await {
            warn!("Cache reaper ended abnormally: {}", err);
        }
    }

    /// Returns true once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns the reaper for `store`.
///
/// Every `interval` the task takes the store lock once and removes each entry
/// older than `interval`. The first pass runs one full interval after start.
/// The loop exits when the handle signals shutdown, when the handle is dropped,
/// or when the store itself has been dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let reaper = spawn_reaper(Arc::downgrade(&store), Duration::from_secs(5));
/// // Later:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper(store: Weak<Mutex<CacheStore>>, interval: Duration) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        // An interval past the clock's range never ticks.
        let start = Instant::now()
            .checked_add(interval)
            .unwrap_or_else(far_future);
        let mut ticker = time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => break,
                _ = ticker.tick() => {
                    let Some(store) = store.upgrade() else {
                        debug!("Cache dropped, reaper exiting");
                        break;
                    };

                    let removed = store.lock().await.reap();

                    if removed > 0 {
                        info!("Cache reap: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reap: no expired entries found");
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    });

    ReaperHandle {
        shutdown: Some(shutdown_tx),
        task,
    }
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86400 * 365 * 30)
}
