//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO eviction, lazy TTL
//! expiration and tag invalidation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, Clock, FifoQueue, SystemClock, Tag};

// == Tagged Cache ==
/// In-memory key/value store with per-entry TTL, tags and a capacity bound.
///
/// Expiry is lazy: an expired entry lingers until `get` finds it, or until
/// `purge_expired` runs. Only `get` and `purge_expired` remove stale
/// entries; `has` and `stats` take `&self` and never do.
///
/// The store assumes exclusive access per call. Share it across threads
/// behind a lock (see [`SharedCache`](crate::cache::SharedCache)).
#[derive(Debug)]
pub struct TaggedCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order for eviction
    fifo: FifoQueue,
    stats: CacheStats,
    max_entries: usize,
    default_ttl_ms: i64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TaggedCache<V> {
    // == Constructor ==
    /// Creates a new store with specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries, raised to 1 if zero
    /// * `default_ttl_ms` - TTL applied when `set` is called without one
    pub fn new(max_entries: usize, default_ttl_ms: i64) -> Self {
        Self::with_clock(max_entries, default_ttl_ms, Arc::new(SystemClock))
    }

    /// Creates a new store reading time from `clock`.
    pub fn with_clock(max_entries: usize, default_ttl_ms: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            fifo: FifoQueue::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            default_ttl_ms,
            clock,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Counts a hit when a fresh entry is found. A missing key counts a
    /// miss; an expired entry is removed and counts a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                trace!(key, "cache miss");
                return None;
            }
            Some(entry) => entry.is_expired(now),
        };

        if expired {
            self.drop_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            trace!(key, "cache miss (expired)");
            return None;
        }

        self.stats.record_hit();
        trace!(key, "cache hit");
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores a value, replacing any existing entry for `key`.
    ///
    /// Replacement takes the new TTL and tags only; nothing is merged from
    /// the old entry. When a new key arrives at capacity, the oldest
    /// inserted entry is evicted first.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the default if None)
    /// * `tags` - Invalidation labels for the entry
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: V,
        ttl_ms: Option<i64>,
        tags: impl IntoIterator<Item = Tag>,
    ) {
        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.fifo.pop_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "evicted oldest entry at capacity");
            }
        }

        let ttl_ms = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms, tags);

        self.fifo.push(&key);
        self.entries.insert(key, entry);
    }

    // == Get Or Insert ==
    /// Returns the cached value, or computes, stores and returns it.
    ///
    /// Hit/miss accounting is the same as for `get`.
    pub fn get_or_insert_with<F>(
        &mut self,
        key: &str,
        ttl_ms: Option<i64>,
        tags: impl IntoIterator<Item = Tag>,
        fetch: F,
    ) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return value;
        }

        let value = fetch();
        self.set(key, value.clone(), ttl_ms, tags);
        value
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether an entry was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.drop_entry(key)
    }

    // == Clear ==
    /// Drops every entry and resets all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.fifo.clear();
        self.stats = CacheStats::new();
        debug!("cache cleared");
    }

    // == Invalidate By Tag ==
    /// Removes every entry carrying `tag`. Returns how many were removed.
    pub fn invalidate_by_tag(&mut self, tag: &Tag) -> usize {
        let tag = &tag.clone().normalized();
        let doomed: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.has_tag(tag))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            self.drop_entry(key);
        }

        debug!(%tag, removed = doomed.len(), "invalidated entries by tag");
        doomed.len()
    }

    // == Has ==
    /// Returns true if a fresh entry exists for `key`.
    ///
    /// Does not touch the hit/miss counters and does not remove an expired
    /// entry it finds; that cleanup is left to `get`.
    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.size = self.entries.len();
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.drop_entry(key);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    /// Remaining TTL for a fresh entry, without touching counters.
    pub fn ttl_remaining_ms(&self, key: &str) -> Option<i64> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.ttl_remaining_ms(now))
    }

    // == Length ==
    /// Returns the current number of tracked entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl_ms(&self) -> i64 {
        self.default_ttl_ms
    }

    fn drop_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.fifo.remove(key);
            true
        } else {
            false
        }
    }
}
