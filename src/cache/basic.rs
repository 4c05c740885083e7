//! Basic Cache Module
//!
//! Unbounded cache: stores everything, discards nothing.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Cache, Discarded, Policy};

// == Basic Cache ==
/// Cache without a size limit or eviction.
#[derive(Debug)]
pub struct BasicCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for BasicCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> BasicCache<K, V> {
    // == Constructor ==
    /// Creates an empty unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> Cache<K, V> for BasicCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>> {
        self.entries.insert(key, value);
        debug!(policy = "basic", size = self.entries.len(), "entry stored");
        None
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.entries.iter().collect()
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn policy(&self) -> Policy {
        Policy::Basic
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MAX_ITEMS;

    #[test]
    fn test_basic_put_and_get() {
        let mut cache = BasicCache::new();

        assert!(cache.put(Some("A"), Some("Hello")).is_none());
        assert!(cache.put(Some("B"), Some("World")).is_none());

        assert_eq!(cache.get(Some(&"A")), Some(&"Hello"));
        assert_eq!(cache.get(Some(&"B")), Some(&"World"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_basic_overwrite() {
        let mut cache = BasicCache::new();

        cache.put(Some("A"), Some(1));
        cache.put(Some("A"), Some(2));

        assert_eq!(cache.get(Some(&"A")), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_basic_absent_input_is_noop() {
        let mut cache: BasicCache<&str, u32> = BasicCache::new();

        assert!(cache.put(None, Some(1)).is_none());
        assert!(cache.put(Some("A"), None).is_none());
        assert!(cache.put(None, None).is_none());

        assert!(cache.is_empty());
        assert_eq!(cache.get(None), None);
        assert_eq!(cache.get(Some(&"missing")), None);
    }

    #[test]
    fn test_basic_never_evicts() {
        let mut cache = BasicCache::new();

        for i in 0..(MAX_ITEMS * 10) {
            assert!(cache.put(Some(i), Some(i * 2)).is_none());
        }

        assert_eq!(cache.len(), MAX_ITEMS * 10);
        assert_eq!(cache.capacity(), None);
        assert_eq!(cache.policy(), Policy::Basic);
    }
}
