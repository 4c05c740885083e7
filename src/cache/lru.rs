//! LRU Cache Module
//!
//! Discards the least recently used entry.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::listener::DiscardNotifier;
use crate::cache::{Cache, Discarded, OrderedStore, Policy, MAX_ITEMS};

// == LRU Cache ==
/// Least-recently-used cache.
///
/// Store order is recency of use:
/// - Front = most recently read or written
/// - Back = least recently used, next to be discarded
#[derive(Debug)]
pub struct LruCache<K, V> {
    store: OrderedStore<K, V>,
    capacity: usize,
    notifier: DiscardNotifier<K, V>,
}

impl<K: Eq + Hash + Clone + Debug, V> Default for LruCache<K, V> {
    fn default() -> Self {
        Self::new(MAX_ITEMS)
    }
}

impl<K: Eq + Hash + Clone + Debug, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: OrderedStore::new(),
            capacity: capacity.max(1),
            notifier: DiscardNotifier::new(Policy::Lru),
        }
    }

    // == With Listener ==
    /// Registers a callback run for every discarded entry.
    pub fn with_listener(mut self, listener: impl FnMut(&K, &V) + 'static) -> Self {
        self.notifier.set_listener(Box::new(listener));
        self
    }
}

impl<K: Eq + Hash + Clone + Debug, V> Cache<K, V> for LruCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>> {
        let discarded = if !self.store.contains(&key) && self.store.len() >= self.capacity {
            let least_recent = self.store.pop_back();
            self.notifier.discard(least_recent)
        } else {
            None
        };

        debug!(policy = "lru", key = ?key, "storing entry");
        self.store.upsert_front(key, value);
        discarded
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        self.store.move_to_front(key);
        self.store.get(key)
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.store.iter().collect()
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn policy(&self) -> Policy {
        Policy::Lru
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LruCache<&'static str, u32> {
        let mut cache = LruCache::default();
        for (i, key) in ["A", "B", "C", "D"].into_iter().enumerate() {
            cache.put(Some(key), Some(i as u32));
        }
        cache
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut cache = filled();

        let discarded = cache.put(Some("E"), Some(4));
        assert_eq!(discarded.map(|d| d.key), Some("A"));
    }

    #[test]
    fn test_lru_read_protects_entry() {
        let mut cache = filled();

        cache.get(Some(&"A"));
        let discarded = cache.put(Some("E"), Some(4));
        assert_eq!(discarded.map(|d| d.key), Some("B"));
        assert!(cache.contains(&"A"));
    }

    #[test]
    fn test_lru_overwrite_protects_entry() {
        let mut cache = filled();

        assert!(cache.put(Some("A"), Some(10)).is_none());
        let discarded = cache.put(Some("E"), Some(4));
        assert_eq!(discarded.map(|d| d.key), Some("B"));
    }

    #[test]
    fn test_lru_eviction_order_after_touches() {
        let mut cache = LruCache::new(3);
        cache.put(Some("a"), Some(1));
        cache.put(Some("b"), Some(2));
        cache.put(Some("c"), Some(3));

        cache.get(Some(&"a"));
        cache.get(Some(&"c"));
        cache.get(Some(&"b"));

        // Recency is now b, c, a
        let evicted: Vec<_> = ["x", "y", "z"]
            .into_iter()
            .filter_map(|k| cache.put(Some(k), Some(0)).map(|d| d.key))
            .collect();
        assert_eq!(evicted, vec!["a", "c", "b"]);
    }
}
