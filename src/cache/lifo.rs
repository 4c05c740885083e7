//! LIFO Cache Module
//!
//! Discards the most recently written entry.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::listener::DiscardNotifier;
use crate::cache::{Cache, Discarded, OrderedStore, Policy, MAX_ITEMS};

// == LIFO Cache ==
/// Last-in-first-out cache.
///
/// Store order is write order:
/// - Front = least recently written
/// - Back = most recently written, next to be discarded
///
/// Only writes move entries; overwriting a key marks it as the newest write.
#[derive(Debug)]
pub struct LifoCache<K, V> {
    store: OrderedStore<K, V>,
    capacity: usize,
    notifier: DiscardNotifier<K, V>,
}

impl<K: Eq + Hash + Clone + Debug, V> Default for LifoCache<K, V> {
    fn default() -> Self {
        Self::new(MAX_ITEMS)
    }
}

impl<K: Eq + Hash + Clone + Debug, V> LifoCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: OrderedStore::new(),
            capacity: capacity.max(1),
            notifier: DiscardNotifier::new(Policy::Lifo),
        }
    }

    // == With Listener ==
    /// Registers a callback run for every discarded entry.
    pub fn with_listener(mut self, listener: impl FnMut(&K, &V) + 'static) -> Self {
        self.notifier.set_listener(Box::new(listener));
        self
    }
}

impl<K: Eq + Hash + Clone + Debug, V> Cache<K, V> for LifoCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>> {
        // Make room before writing so the new key is not the one discarded
        let discarded = if !self.store.contains(&key) && self.store.len() >= self.capacity {
            let newest = self.store.pop_back();
            self.notifier.discard(newest)
        } else {
            None
        };

        debug!(policy = "lifo", key = ?key, "storing entry");
        self.store.upsert_back(key, value);
        discarded
    }

    fn lookup(&mut self, key: &K) -> Option<&V> {
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
        Policy::Lifo
    }
}
