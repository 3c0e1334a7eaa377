//! Deduplication storage for the search engines.
//!
//! Keys are exact [`StateKey`] transcriptions, so a hit always means the
//! same cube contents, never a hash collision.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap as HbHashMap;
use hashbrown::HashSet as HbHashSet;

use crate::encode::StateKey;

type FastHasher = BuildHasherDefault<ahash::AHasher>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeenStats {
    pub inserts: u64,
    pub hits: u64,
}

/// Global visited set for breadth-first search: a state once enqueued is
/// never enqueued again.
#[derive(Debug, Default)]
pub struct SeenSet {
    set: HbHashSet<StateKey, FastHasher>,
    stats: SeenStats,
}

impl SeenSet {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            set: HbHashSet::with_capacity_and_hasher(cap, FastHasher::default()),
            stats: SeenStats::default(),
        }
    }

    /// Records `key`; returns true when it was new.
    #[inline]
    pub fn insert(&mut self, key: StateKey) -> bool {
        if self.set.insert(key) {
            self.stats.inserts = self.stats.inserts.saturating_add(1);
            true
        } else {
            self.stats.hits = self.stats.hits.saturating_add(1);
            false
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Snapshot of accounting counters.
    #[inline]
    pub fn stats(&self) -> SeenStats {
        self.stats
    }
}

/// Per-iteration transposition map for IDA*: remembers the shallowest depth
/// each state was reached at within the current threshold iteration.
#[derive(Debug, Default)]
pub struct SeenMap {
    map: HbHashMap<StateKey, u32, FastHasher>,
    stats: SeenStats,
}

impl SeenMap {
    /// Records reaching `key` at `depth`; returns true when the caller
    /// should expand it (first visit, or a strictly shallower revisit that
    /// unlocks subtree depth a deeper visit had cut off).
    #[inline]
    pub fn visit(&mut self, key: StateKey, depth: u32) -> bool {
        match self.map.get_mut(&key) {
            Some(best) if *best <= depth => {
                self.stats.hits = self.stats.hits.saturating_add(1);
                false
            }
            Some(best) => {
                *best = depth;
                self.stats.inserts = self.stats.inserts.saturating_add(1);
                true
            }
            None => {
                self.map.insert(key, depth);
                self.stats.inserts = self.stats.inserts.saturating_add(1);
                true
            }
        }
    }

    /// Drops all entries at an iteration boundary. Counters survive so the
    /// final stats cover the whole search.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Snapshot of accounting counters.
    #[inline]
    pub fn stats(&self) -> SeenStats {
        self.stats
    }
}
