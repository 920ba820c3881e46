//! Cache Entry Module
//!
//! Defines a single cached payload tagged with its creation time.

use std::sync::Arc;
use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored payload and the instant it was inserted.
///
/// The payload is shared, never mutated; replacing a key builds a new entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached bytes
    pub value: Arc<[u8]>,
    /// Insertion time (monotonic)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: impl Into<Arc<[u8]>>) -> Self {
        Self::new_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn new_at(value: impl Into<Arc<[u8]>>, created_at: Instant) -> Self {
        Self {
            value: value.into(),
            created_at,
        }
    }

    // == Age ==
    /// Age of the entry as seen from `now`. Saturates to zero if `now` is earlier.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is eligible for reaping.
    ///
    /// Boundary condition: an entry is stale only when its age strictly exceeds
    /// `ttl`. An entry exactly `ttl` old survives the pass.
    pub fn is_stale_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
