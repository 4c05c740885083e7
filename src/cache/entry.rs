//! Cache Entry Module
//!
//! Defines the node stored in the ordered store's arena and the record handed
//! back when an entry is discarded.

use generational_arena::Index;

// == Cache Entry ==
/// A single key-value pair linked into the store's ordering list.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<K, V> {
    /// The entry key (also held by the lookup map)
    pub key: K,
    /// The stored value
    pub value: V,
    /// Neighbour towards the head of the list
    pub prev: Option<Index>,
    /// Neighbour towards the tail of the list
    pub next: Option<Index>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}

// == Discarded ==
/// An entry removed from a cache to make room for a new one.
///
/// Returned by `put` so the caller observes the eviction synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded<K, V> {
    /// Key of the evicted entry
    pub key: K,
    /// Value the evicted entry held
    pub value: V,
}

impl<K, V> From<(K, V)> for Discarded<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}
