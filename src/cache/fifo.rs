//! FIFO Cache Module
//!
//! Discards the entry that was inserted first.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::listener::DiscardNotifier;
use crate::cache::{Cache, Discarded, OrderedStore, Policy, MAX_ITEMS};

// == FIFO Cache ==
/// First-in-first-out cache.
///
/// Store order is insertion order:
/// - Front = oldest entry, next to be discarded
/// - Back = newest entry
///
/// Overwriting a key keeps its original position and reads never reorder.
#[derive(Debug)]
pub struct FifoCache<K, V> {
    store: OrderedStore<K, V>,
    capacity: usize,
    notifier: DiscardNotifier<K, V>,
}

impl<K: Eq + Hash + Clone + Debug, V> Default for FifoCache<K, V> {
    fn default() -> Self {
        Self::new(MAX_ITEMS)
    }
}

impl<K: Eq + Hash + Clone + Debug, V> FifoCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: OrderedStore::new(),
            capacity: capacity.max(1),
            notifier: DiscardNotifier::new(Policy::Fifo),
        }
    }

    // == With Listener ==
    /// Registers a callback run for every discarded entry.
    pub fn with_listener(mut self, listener: impl FnMut(&K, &V) + 'static) -> Self {
        self.notifier.set_listener(Box::new(listener));
        self
    }
}

impl<K: Eq + Hash + Clone + Debug, V> Cache<K, V> for FifoCache<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>> {
        debug!(policy = "fifo", key = ?key, "storing entry");
        self.store.upsert_in_place(key, value);

        if self.store.len() > self.capacity {
            let oldest = self.store.pop_front();
            return self.notifier.discard(oldest);
        }
        None
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
        Policy::Fifo
    }
}
