//! Frequency Index Module
//!
//! Orders cache keys by access frequency for LFU eviction.

use std::collections::{BTreeMap, VecDeque};

// == Frequency Index ==
/// Ordered mapping from access count to the keys currently at that count.
///
/// Each bucket is a FIFO queue ordered by promotion time:
/// - Front = earliest promoted into the bucket (eviction candidate)
/// - Back = most recently promoted
///
/// Empty buckets are removed immediately, so the first entry of the map
/// is always the true minimum frequency.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    /// Frequency count -> keys at that count, FIFO by promotion time
    buckets: BTreeMap<u64, VecDeque<i64>>,
}

impl FrequencyIndex {
    // == Constructor ==
    /// Creates a new empty frequency index.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    // == Insert ==
    /// Adds a newly inserted key at frequency 1 (back of the bucket).
    pub fn insert(&mut self, key: i64) {
        self.buckets.entry(1).or_default().push_back(key);
    }

    // == Promote ==
    /// Moves a key from its current bucket to the next-higher one.
    ///
    /// The key is removed from `frequency`, the bucket is dropped if now
    /// empty, and the key is appended to the back of `frequency + 1`.
    pub fn promote(&mut self, key: i64, frequency: u64) {
        self.remove(key, frequency);
        self.buckets.entry(frequency + 1).or_default().push_back(key);
    }

    // == Remove ==
    /// Removes a key from the bucket at `frequency`, dropping the bucket
    /// if it becomes empty.
    pub fn remove(&mut self, key: i64, frequency: u64) {
        if let Some(bucket) = self.buckets.get_mut(&frequency) {
            bucket.retain(|k| *k != key);
            if bucket.is_empty() {
                self.buckets.remove(&frequency);
            }
        }
    }

    // == Pop Lowest ==
    /// Removes and returns the eviction candidate: the earliest-promoted
    /// key in the lowest non-empty bucket.
    ///
    /// Returns None if the index is empty.
    pub fn pop_lowest(&mut self) -> Option<i64> {
        let lowest = *self.buckets.keys().next()?;
        let bucket = self.buckets.get_mut(&lowest)?;
        let key = bucket.pop_front();
        if bucket.is_empty() {
            self.buckets.remove(&lowest);
        }
        key
    }

    // == Peek Lowest ==
    /// Returns the eviction candidate without removing it.
    #[allow(dead_code)]
    pub fn peek_lowest(&self) -> Option<i64> {
        self.buckets.values().next()?.front().copied()
    }

    // == Clear ==
    /// Removes all buckets.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    // == Length ==
    /// Returns the total number of keys across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(VecDeque::len).sum()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    // == Frequency Of ==
    /// Returns the bucket a key currently sits in, if any.
    #[cfg(test)]
    pub fn frequency_of(&self, key: i64) -> Option<u64> {
        self.buckets
            .iter()
            .find(|(_, bucket)| bucket.contains(&key))
            .map(|(freq, _)| *freq)
    }
}
