//! Ordered Store Module
//!
//! Hash-keyed storage that also keeps its entries in a doubly linked list, so
//! every eviction policy can reorder or pop from either end in O(1).

use std::collections::HashMap;
use std::hash::Hash;

use generational_arena::{Arena, Index};

use crate::cache::entry::CacheEntry;

// == Ordered Store ==
/// Key-value storage with an explicit entry order.
///
/// Entries live in an arena and are linked by index:
/// - Front (head) = first in the list
/// - Back (tail) = last in the list
///
/// What "first" and "last" mean is decided by the policy driving the store.
#[derive(Debug)]
pub struct OrderedStore<K, V> {
    /// Arena holding every linked entry
    nodes: Arena<CacheEntry<K, V>>,
    /// Key to arena slot
    lookup: HashMap<K, Index>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<K: Eq + Hash + Clone, V> Default for OrderedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> OrderedStore<K, V> {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            lookup: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    // == Contains ==
    /// Checks if a key is stored.
    pub fn contains(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    // == Get ==
    /// Returns the value for `key` without touching the order.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = *self.lookup.get(key)?;
        self.nodes.get(index).map(|entry| &entry.value)
    }

    // == Upsert In Place ==
    /// Stores `value` under `key`.
    ///
    /// An existing key keeps its position; a new key is appended at the back.
    pub fn upsert_in_place(&mut self, key: K, value: V) {
        if let Some(&index) = self.lookup.get(&key) {
            self.nodes[index].value = value;
        } else {
            let index = self.allocate(key, value);
            self.link_back(index);
        }
    }

    // == Upsert Back ==
    /// Stores `value` under `key` and moves the entry to the back.
    pub fn upsert_back(&mut self, key: K, value: V) {
        if let Some(&index) = self.lookup.get(&key) {
            self.nodes[index].value = value;
            self.unlink(index);
            self.link_back(index);
        } else {
            let index = self.allocate(key, value);
            self.link_back(index);
        }
    }

    // == Upsert Front ==
    /// Stores `value` under `key` and moves the entry to the front.
    pub fn upsert_front(&mut self, key: K, value: V) {
        if let Some(&index) = self.lookup.get(&key) {
            self.nodes[index].value = value;
            self.unlink(index);
            self.link_front(index);
        } else {
            let index = self.allocate(key, value);
            self.link_front(index);
        }
    }

    // == Move To Front ==
    /// Moves an existing entry to the front.
    ///
    /// Returns false (and changes nothing) if the key is not stored.
    pub fn move_to_front(&mut self, key: &K) -> bool {
        let Some(&index) = self.lookup.get(key) else {
            return false;
        };
        if self.head != Some(index) {
            self.unlink(index);
            self.link_front(index);
        }
        true
    }

    // == Move To Back ==
    /// Moves an existing entry to the back.
    ///
    /// Returns false (and changes nothing) if the key is not stored.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        let Some(&index) = self.lookup.get(key) else {
            return false;
        };
        if self.tail != Some(index) {
            self.unlink(index);
            self.link_back(index);
        }
        true
    }

    // == Pop Front ==
    /// Removes and returns the entry at the front.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let index = self.head?;
        self.detach(index)
    }

    // == Pop Back ==
    /// Removes and returns the entry at the back.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let index = self.tail?;
        self.detach(index)
    }

    // == Peek ==
    /// Returns the key at the front without removing it.
    pub fn peek_front(&self) -> Option<&K> {
        self.head.map(|index| &self.nodes[index].key)
    }

    /// Returns the key at the back without removing it.
    pub fn peek_back(&self) -> Option<&K> {
        self.tail.map(|index| &self.nodes[index].key)
    }

    // == Iter ==
    /// Iterates entries from front to back.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            store: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    // Inserts a new unlinked node and registers it in the lookup map.
    fn allocate(&mut self, key: K, value: V) -> Index {
        let index = self.nodes.insert(CacheEntry::new(key.clone(), value));
        self.lookup.insert(key, index);
        index
    }

    fn detach(&mut self, index: Index) -> Option<(K, V)> {
        self.unlink(index);
        let entry = self.nodes.remove(index)?;
        self.lookup.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    fn unlink(&mut self, index: Index) {
        let (prev, next) = {
            let entry = &self.nodes[index];
            (entry.prev, entry.next)
        };

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        let entry = &mut self.nodes[index];
        entry.prev = None;
        entry.next = None;
    }

    fn link_front(&mut self, index: Index) {
        let old_head = self.head;
        {
            let entry = &mut self.nodes[index];
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(old_head) => self.nodes[old_head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    fn link_back(&mut self, index: Index) {
        let old_tail = self.tail;
        {
            let entry = &mut self.nodes[index];
            entry.next = None;
            entry.prev = old_tail;
        }
        match old_tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }
}

// == Iterator ==
/// Front-to-back iterator over an [`OrderedStore`].
pub struct Iter<'a, K, V> {
    store: &'a OrderedStore<K, V>,
    cursor: Option<Index>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.store.nodes.get(self.cursor?)?;
        self.cursor = entry.next;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
