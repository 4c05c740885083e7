//! Cache Snapshot Module
//!
//! Serializable view of a cache's contents, used for debugging and the
//! `dump` script command.

use serde::Serialize;

use crate::cache::Policy;

// == Cache Snapshot ==
/// Borrowed picture of a cache at one point in time.
#[derive(Debug, Serialize)]
pub struct CacheSnapshot<'a, K, V> {
    /// Policy of the cache
    pub policy: Policy,
    /// Capacity, `None` for unbounded caches
    pub capacity: Option<usize>,
    /// Entries in policy order
    pub entries: Vec<SnapshotEntry<'a, K, V>>,
}

/// One key-value pair in a [`CacheSnapshot`].
#[derive(Debug, Serialize)]
pub struct SnapshotEntry<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
}

impl<'a, K, V> CacheSnapshot<'a, K, V> {
    // == Constructor ==
    pub fn new(policy: Policy, capacity: Option<usize>, entries: Vec<(&'a K, &'a V)>) -> Self {
        Self {
            policy,
            capacity,
            entries: entries
                .into_iter()
                .map(|(key, value)| SnapshotEntry { key, value })
                .collect(),
        }
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Keys ==
    /// Keys in snapshot order.
    pub fn keys(&self) -> Vec<&'a K> {
        self.entries.iter().map(|entry| entry.key).collect()
    }

    // == Sorted ==
    /// Entries ordered by key, the layout used for printing.
    pub fn sorted(&self) -> Vec<(&'a K, &'a V)>
    where
        K: Ord,
    {
        let mut pairs: Vec<(&'a K, &'a V)> = self
            .entries
            .iter()
            .map(|entry| (entry.key, entry.value))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_policy_and_entries() {
        let (k1, v1) = ("b".to_string(), 2u32);
        let (k2, v2) = ("a".to_string(), 1u32);
        let snapshot = CacheSnapshot::new(Policy::Fifo, Some(4), vec![(&k1, &v1), (&k2, &v2)]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["policy"], "fifo");
        assert_eq!(json["capacity"], 4);
        assert_eq!(json["entries"][0]["key"], "b");
        assert_eq!(json["entries"][1]["value"], 1);
    }

    #[test]
    fn test_snapshot_unbounded_capacity_is_null() {
        let snapshot: CacheSnapshot<'_, String, String> =
            CacheSnapshot::new(Policy::Basic, None, Vec::new());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["capacity"].is_null());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_sorted_and_keys() {
        let (k1, v1) = ("c", 3);
        let (k2, v2) = ("a", 1);
        let (k3, v3) = ("b", 2);
        let snapshot = CacheSnapshot::new(
            Policy::Lifo,
            Some(4),
            vec![(&k1, &v1), (&k2, &v2), (&k3, &v3)],
        );

        assert_eq!(snapshot.keys(), vec![&"c", &"a", &"b"]);
        let sorted: Vec<_> = snapshot.sorted().into_iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(sorted, vec![("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(snapshot.len(), 3);
    }
}
