//! Cache Store Module
//!
//! The unsynchronized map behind the shared `Cache` handle. Every method here
//! runs inside the handle's critical section.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with interval-based expiry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL threshold, also the reap period
    interval: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or fully replaces the entry for `key`, stamped with now.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Arc<[u8]>>) {
        self.insert_entry(key.into(), CacheEntry::new(value));
    }

    /// Inserts a prepared entry. Used when the creation instant matters.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the payload for `key` if present, regardless of its age.
    ///
    /// Staleness is only resolved by `reap`.
    pub fn get(&mut self, key: &str) -> Option<Arc<[u8]>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(Arc::clone(&entry.value))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than the interval. Returns the number removed.
    pub fn reap(&mut self) -> usize {
        self.reap_at(Instant::now())
    }

    /// Reaps as if the current time were `now`.
    pub fn reap_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale_at(now, ttl));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
