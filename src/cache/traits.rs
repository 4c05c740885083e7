//! Cache Trait Module
//!
//! The contract every eviction policy implements.

use crate::cache::{CacheSnapshot, Discarded, Policy};

// == Cache ==
/// A key-value cache with a fixed eviction policy.
///
/// `None` stands for an absent key or value. `put` ignores absent input and
/// `get` answers absent or unknown keys with `None`; neither ever fails.
///
/// Implementors supply [`insert`](Cache::insert) and
/// [`lookup`](Cache::lookup); the absent-input handling lives here so every
/// policy shares it.
pub trait Cache<K, V> {
    // == Insert ==
    /// Stores `value` under `key`, evicting per policy if needed.
    ///
    /// Returns the discarded entry when an eviction happened.
    fn insert(&mut self, key: K, value: V) -> Option<Discarded<K, V>>;

    // == Lookup ==
    /// Returns the value stored under `key`.
    ///
    /// Policies that track recency of use update it here.
    fn lookup(&mut self, key: &K) -> Option<&V>;

    /// Entries in policy order (arbitrary order for unbounded caches).
    fn entries(&self) -> Vec<(&K, &V)>;

    /// Returns true if `key` is stored. Never touches ordering metadata.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, or `None` if the cache never evicts.
    fn capacity(&self) -> Option<usize>;

    /// The eviction policy this cache applies.
    fn policy(&self) -> Policy;

    // == Put ==
    /// Stores `value` under `key`.
    ///
    /// A no-op returning `None` when either argument is absent.
    fn put(&mut self, key: Option<K>, value: Option<V>) -> Option<Discarded<K, V>> {
        match (key, value) {
            (Some(key), Some(value)) => self.insert(key, value),
            _ => None,
        }
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if absent or missing.
    fn get(&mut self, key: Option<&K>) -> Option<&V> {
        self.lookup(key?)
    }

    // == Snapshot ==
    /// Read-only view of the current contents.
    fn snapshot(&self) -> CacheSnapshot<'_, K, V> {
        CacheSnapshot::new(self.policy(), self.capacity(), self.entries())
    }
}
