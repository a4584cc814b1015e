//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, tag invalidation and
//! FIFO eviction.

mod clock;
mod entry;
mod fifo;
pub mod keys;
mod stats;
mod store;
mod tag;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use fifo::FifoQueue;
pub use stats::CacheStats;
pub use store::TaggedCache;
pub use tag::Tag;

/// A cache shared by every consumer of one application instance.
pub type SharedCache<V> = Arc<RwLock<TaggedCache<V>>>;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default TTL in milliseconds (5 minutes)
pub const DEFAULT_TTL_MS: i64 = 5 * 60 * 1000;
