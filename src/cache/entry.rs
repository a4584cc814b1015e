//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and tag support.

use std::collections::HashSet;

use crate::cache::Tag;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// Entries are never partially updated: a `set` on an existing key builds a
/// fresh entry and replaces the old one wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: i64,
    /// Time to live in milliseconds; zero or negative expires on next read
    pub ttl_ms: i64,
    /// Invalidation labels, never used for lookup
    pub tags: HashSet<Tag>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    pub fn new(value: V, now_ms: i64, ttl_ms: i64, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            value,
            inserted_at: now_ms,
            ttl_ms,
            tags: tags.into_iter().map(Tag::normalized).collect(),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// Boundary condition: the entry is expired once strictly more than
    /// `ttl_ms` has elapsed since insertion, so a read exactly at
    /// `inserted_at + ttl_ms` still sees it. A non-positive TTL is expired
    /// unconditionally.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.ttl_ms <= 0 || now_ms.saturating_sub(self.inserted_at) > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: i64) -> i64 {
        if self.is_expired(now_ms) {
            0
        } else {
            self.inserted_at
                .saturating_add(self.ttl_ms)
                .saturating_sub(now_ms)
        }
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
