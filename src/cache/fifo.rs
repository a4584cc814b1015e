//! FIFO Queue Module
//!
//! Tracks insertion order for capacity eviction.

use std::collections::{BTreeMap, HashMap};

// == FIFO Queue ==
/// Tracks insertion order for the eviction strategy.
///
/// Every insertion gets a monotonically increasing sequence number:
/// - `order` maps sequence -> key, so the first entry is the oldest
/// - `seq_of` maps key -> its current sequence, for removal without a scan
///
/// Reads never reorder the queue; only (re)insertion does. Push, remove and
/// pop are all O(log n).
#[derive(Debug, Default)]
pub struct FifoQueue {
    order: BTreeMap<u64, String>,
    seq_of: HashMap<String, u64>,
    next_seq: u64,
}

impl FifoQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push ==
    /// Records an insertion of `key` as the newest.
    ///
    /// A key already tracked is moved to the back, since replacing an entry
    /// counts as a fresh insertion.
    pub fn push(&mut self, key: &str) {
        let seq = self.next_seq;
        self.next_seq += 1;

        if let Some(old) = self.seq_of.insert(key.to_string(), seq) {
            self.order.remove(&old);
        }
        self.order.insert(seq, key.to_string());
    }

    // == Remove ==
    /// Removes a key from the queue.
    pub fn remove(&mut self, key: &str) {
        if let Some(seq) = self.seq_of.remove(key) {
            self.order.remove(&seq);
        }
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest inserted key.
    ///
    /// Returns None if the queue is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.seq_of.remove(&key);
        Some(key)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seq_of.clear();
    }

    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.values().next()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.seq_of.contains_key(key)
    }
}
