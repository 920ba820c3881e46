//! Cache Module
//!
//! In-memory response cache with interval-based expiry.
//!
//! `Cache` is a cheap, cloneable handle around a single `CacheStore` guarded by
//! one exclusive lock. Each cache owns a background reaper that sweeps entries
//! older than the interval; the reaper's lifetime is controlled through the
//! `ReaperHandle` returned at construction.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::{PokedexError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Cache Handle ==
/// Shared handle to a TTL cache.
///
/// Clones refer to the same entries. The reaper only holds a weak reference,
/// so it stops on its own once every handle is dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `interval` is both the reap period and the maximum age an entry may
    /// reach before a pass removes it. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// Returns `PokedexError::InvalidInterval` when `interval` is zero or too
    /// large to schedule a reap pass.
    pub fn new(interval: Duration) -> Result<(Self, ReaperHandle)> {
        if interval.is_zero() || Instant::now().checked_add(interval).is_none() {
            return Err(PokedexError::InvalidInterval);
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let reaper = spawn_reaper(Arc::downgrade(&store), interval);

        Ok((Self { store, interval }, reaper))
    }

    // == Add ==
    /// Inserts or replaces the payload stored under `key`.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) {
        let key = key.into();
        let value = value.into();
        self.store.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Entries past their interval stay visible until the next reap pass.
    pub async fn get(&self, key: &str) -> Option<Arc<[u8]>> {
        self.store.lock().await.get(key)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Reap period and maximum entry age. Fixed at construction.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_rejects_zero_interval() {
        let result = Cache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidInterval)));
    }

    #[tokio::test]
    async fn test_new_rejects_unschedulable_interval() {
        let result = Cache::new(Duration::from_secs(u64::MAX));
        assert!(matches!(result, Err(PokedexError::InvalidInterval)));

        let result = Cache::new(Duration::MAX);
        assert!(matches!(result, Err(PokedexError::InvalidInterval)));
    }

    #[tokio::test]
    async fn test_interval_available_while_store_locked() {
        let (cache, reaper) = Cache::new(Duration::from_millis(750)).unwrap();

        let guard = cache.store.lock().await;
        assert_eq!(cache.interval(), Duration::from_millis(750));

        drop(guard);
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();

        cache.add("https://pokeapi.co/api/v2/pokemon/pikachu", b"{}".to_vec()).await;

        let value = cache.get("https://pokeapi.co/api/v2/pokemon/pikachu").await;
        assert_eq!(value.as_deref(), Some(&b"{}"[..]));
        assert!(cache.get("https://pokeapi.co/api/v2/pokemon/eevee").await.is_none());

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();
        let other = cache.clone();

        other.add("shared", b"1".to_vec()).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("shared").await.as_deref(), Some(&b"1"[..]));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_stats_track_lookups() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();

        cache.add("a", b"1".to_vec()).await;
        cache.get("a").await;
        cache.get("b").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(cache.interval(), Duration::from_secs(5));

        reaper.shutdown().await;
    }
}
