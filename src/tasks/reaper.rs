//! TTL Reaper Task
//!
//! Background task that periodically removes entries idle longer than the
//! configured TTL. Owned by the engine that spawned it: shutdown signals
//! cancellation and joins the task instead of letting it leak.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::LfuStore;

/// How long `shutdown` waits for the reaper to finish before giving up.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

// == Reaper Handle ==
/// Owned handle to a running reaper task.
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) leaves
/// the task running until the runtime stops.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ReaperHandle {
    // == Shutdown ==
    /// Signals the reaper to stop and waits for it to finish.
    ///
    /// A join that outlasts the timeout is reported, not swallowed.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        match tokio::time::timeout(SHUTDOWN_TIMEOUT, self.handle).await {
            Ok(Ok(())) => info!("TTL reaper stopped"),
            Ok(Err(e)) => warn!("TTL reaper task failed during shutdown: {}", e),
            Err(_) => warn!(
                "TTL reaper did not stop within {:?}, giving up on join",
                SHUTDOWN_TIMEOUT
            ),
        }
    }
}

// == Spawn Reaper Task ==
/// Spawns the TTL reaper for an LFU store.
///
/// The task wakes every `ttl_ms / 2` milliseconds (at least 1), takes the
/// write lock only for the sweep itself, and removes every key idle for
/// longer than `ttl_ms`. The sleep between sweeps happens outside the
/// lock.
///
/// # Arguments
/// * `store` - Shared LFU store to sweep
/// * `ttl_ms` - Idle duration after which an entry is reaped
pub fn spawn_reaper_task(store: Arc<RwLock<LfuStore>>, ttl_ms: u64) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
    let interval = Duration::from_millis((ttl_ms / 2).max(1));

    let handle = tokio::spawn(async move {
        info!("Starting TTL reaper with interval {:?}", interval);

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.reap_expired(ttl_ms)
                    };

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
                _ = &mut shutdown_rx => {
                    info!("TTL reaper received shutdown signal");
                    break;
                }
            }
        }
    });

    ReaperHandle {
        shutdown_tx,
        handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_removes_idle_entries() {
        let store = Arc::new(RwLock::new(LfuStore::new(16)));

        {
            let mut store_guard = store.write().await;
            store_guard.put(1, "expire_soon".to_string());
        }

        // 100 ms TTL, so sweeps run every 50 ms
        let handle = spawn_reaper_task(store.clone(), 100);

        tokio::time::sleep(Duration::from_millis(400)).await;

        {
            let mut store_guard = store.write().await;
            assert_eq!(store_guard.get(1), None, "idle entry should be reaped");
            assert_eq!(store_guard.eviction_count(), 1);
        }

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_reaper_preserves_touched_entries() {
        let store = Arc::new(RwLock::new(LfuStore::new(16)));

        {
            let mut store_guard = store.write().await;
            store_guard.put(1, "kept_alive".to_string());
        }

        let handle = spawn_reaper_task(store.clone(), 200);

        // Touch the key faster than the TTL elapses
        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(80)).await;
            let mut store_guard = store.write().await;
            assert!(store_guard.get(1).is_some(), "touched entry must survive");
        }

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_reaper_shutdown_joins_task() {
        let store = Arc::new(RwLock::new(LfuStore::new(16)));

        let handle = spawn_reaper_task(store, 60_000);
        // Completes promptly even though the sweep interval is 30s
        handle.shutdown().await;
    }
}
