//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes entries older than the cache interval on every tick

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
