//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries so cold,
//! never-re-read entries do not hold memory.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedQueryCache;

/// Spawns a background task that periodically removes expired cache entries.
///
/// The task sleeps for the configured interval between sweeps, independent of
/// access patterns. The returned handle is the shutdown hook: abort it during
/// graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache: SharedQueryCache<serde_json::Value> =
///     SharedQueryCache::new(100, Duration::from_secs(60));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 300);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    cache: SharedQueryCache<V>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache: SharedQueryCache<String> =
            SharedQueryCache::new(100, Duration::from_secs(300));

        cache
            .set(
                "expire_soon",
                "value".to_string(),
                Some(Duration::from_millis(50)),
            )
            .await;

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for the entry to expire and one sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.len().await, 0, "Expired entry should have been swept");
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache: SharedQueryCache<String> =
            SharedQueryCache::new(100, Duration::from_secs(300));

        cache
            .set(
                "long_lived",
                "value".to_string(),
                Some(Duration::from_secs(3600)),
            )
            .await;

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get("long_lived").await, Some("value".to_string()));
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: SharedQueryCache<String> =
            SharedQueryCache::new(100, Duration::from_secs(300));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
