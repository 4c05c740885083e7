//! MRU Cache Module
//!
//! Discards the most recently used entry.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::listener::DiscardNotifier;
use crate::cache::{Cache, Discarded, OrderedStore, Policy, MAX_ITEMS};

// == MRU Cache ==
/// Most-recently-used cache.
///
/// Store order is recency of use:
/// - Front = most recently read or written, next to be discarded
/// - Back = least recently used
///
/// Unlike [`LifoCache`](crate::cache::LifoCache), reads count as use.
#[derive(Debug)]
pub struct MruCache<K, V> {
    store: OrderedStore<K, V>,
    capacity: usize,
    notifier: DiscardNotifier<K, V>,
}

impl<K: Eq + Hash + Clone + Debug, V> Default for MruCache<K, V> {
    fn default() -> Self {
        Self::new(MAX_ITEMS)
    }
}

impl<K: Eq + Hash + Clone + Debug, V> MruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: OrderedStore::new(),
            capacity: capacity.max(1),
            notifier: DiscardNotifier::new(Policy::Mru),
        }
    }

    // == With Listener ==
    /// Registers a callback run for every discarded entry.
    pub fn with_listener(mut self, listener: impl FnMut(&K, &V) + 'static) -> Self {
        self.notifier.set_listener(Box::new(listener));
        self
    }
}

impl<K: Eq + Hash + Clone + Debug, V> Cache<K, V> for MruCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>> {
        let discarded = if !self.store.contains(&key) && self.store.len() >= self.capacity {
            let most_recent = self.store.pop_front();
            self.notifier.discard(most_recent)
        } else {
            None
        };

        debug!(policy = "mru", key = ?key, "storing entry");
        self.store.upsert_front(key, value);
        discarded
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        // Missing keys leave the order untouched
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
        Policy::Mru
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MruCache<&'static str, &'static str> {
        let mut cache = MruCache::default();
        for key in ["A", "B", "C", "D"] {
            assert!(cache.put(Some(key), Some("value")).is_none());
        }
        cache
    }

    fn keys(cache: &MruCache<&'static str, &'static str>) -> Vec<&'static str> {
        cache.entries().into_iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_mru_evicts_last_written_without_reads() {
        let mut cache = filled();

        let discarded = cache.put(Some("E"), Some("value"));
        assert_eq!(discarded.map(|d| d.key), Some("D"));
        assert_eq!(keys(&cache), vec!["E", "C", "B", "A"]);
    }

    #[test]
    fn test_mru_read_marks_most_recent() {
        let mut cache = filled();

        assert_eq!(cache.get(Some(&"A")), Some(&"value"));

        let discarded = cache.put(Some("E"), Some("value"));
        assert_eq!(discarded.map(|d| d.key), Some("A"));
        assert!(cache.contains(&"D"));
    }

    #[test]
    fn test_mru_missing_read_keeps_order() {
        let mut cache = filled();

        assert_eq!(cache.get(Some(&"Z")), None);
        assert_eq!(cache.get(None), None);

        assert_eq!(keys(&cache), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_mru_overwrite_marks_most_recent() {
        let mut cache = filled();

        assert!(cache.put(Some("B"), Some("new")).is_none());
        assert_eq!(keys(&cache), vec!["B", "D", "C", "A"]);

        let discarded = cache.put(Some("E"), Some("value")).unwrap();
        assert_eq!(discarded.key, "B");
        assert_eq!(discarded.value, "new");
    }

    #[test]
    fn test_mru_absent_input_is_noop() {
        let mut cache = filled();

        assert!(cache.put(None, Some("x")).is_none());
        assert!(cache.put(Some("E"), None).is_none());
        assert!(cache.put(None, None).is_none());

        assert_eq!(keys(&cache), vec!["D", "C", "B", "A"]);
    }
}
