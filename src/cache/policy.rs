//! Eviction Policy Module
//!
//! Names the available policies and builds caches from them at runtime.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::cache::{
    BasicCache, Cache, DiscardListener, FifoCache, LifoCache, LruCache, MruCache,
};
use crate::error::CacheError;

// == Policy ==
/// Rule a cache applies to pick the entry it discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// No limit, nothing is ever discarded
    Basic,
    /// Discards the oldest inserted entry
    Fifo,
    /// Discards the most recently written entry
    Lifo,
    /// Discards the least recently used entry
    Lru,
    /// Discards the most recently used entry
    Mru,
}

impl Policy {
    /// Every policy, in a stable order.
    pub const ALL: [Policy; 5] = [
        Policy::Basic,
        Policy::Fifo,
        Policy::Lifo,
        Policy::Lru,
        Policy::Mru,
    ];

    // == Name ==
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Basic => "basic",
            Policy::Fifo => "fifo",
            Policy::Lifo => "lifo",
            Policy::Lru => "lru",
            Policy::Mru => "mru",
        }
    }

    // == Is Bounded ==
    /// Returns true if caches of this policy enforce a capacity.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Policy::Basic)
    }

    // == Build ==
    /// Creates an empty cache applying this policy.
    ///
    /// `capacity` is ignored for [`Policy::Basic`].
    pub fn build<K, V>(self, capacity: usize) -> Box<dyn Cache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + 'static,
        V: 'static,
    {
        match self {
            Policy::Basic => Box::new(BasicCache::new()),
            Policy::Fifo => Box::new(FifoCache::new(capacity)),
            Policy::Lifo => Box::new(LifoCache::new(capacity)),
            Policy::Lru => Box::new(LruCache::new(capacity)),
            Policy::Mru => Box::new(MruCache::new(capacity)),
        }
    }

    /// Like [`build`](Policy::build), registering a discard listener.
    ///
    /// The listener is dropped for [`Policy::Basic`], which never discards.
    pub fn build_with_listener<K, V>(
        self,
        capacity: usize,
        listener: DiscardListener<K, V>,
    ) -> Box<dyn Cache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + 'static,
        V: 'static,
    {
        match self {
            Policy::Basic => Box::new(BasicCache::new()),
            Policy::Fifo => Box::new(FifoCache::new(capacity).with_listener(listener)),
            Policy::Lifo => Box::new(LifoCache::new(capacity).with_listener(listener)),
            Policy::Lru => Box::new(LruCache::new(capacity).with_listener(listener)),
            Policy::Mru => Box::new(MruCache::new(capacity).with_listener(listener)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "unbounded" => Ok(Policy::Basic),
            "fifo" => Ok(Policy::Fifo),
            "lifo" => Ok(Policy::Lifo),
            "lru" => Ok(Policy::Lru),
            "mru" => Ok(Policy::Mru),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_from_str() {
        assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("LIFO".parse::<Policy>().unwrap(), Policy::Lifo);
        assert_eq!(" mru ".parse::<Policy>().unwrap(), Policy::Mru);
        assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!("unbounded".parse::<Policy>().unwrap(), Policy::Basic);
        assert_eq!("basic".parse::<Policy>().unwrap(), Policy::Basic);
    }

    #[test]
    fn test_policy_from_str_unknown() {
        let result = "lfu".parse::<Policy>();
        assert!(matches!(result, Err(CacheError::UnknownPolicy(name)) if name == "lfu"));
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_is_bounded() {
        assert!(!Policy::Basic.is_bounded());
        assert!(Policy::Fifo.is_bounded());
        assert!(Policy::Mru.is_bounded());
    }

    #[test]
    fn test_policy_build_matches_policy() {
        for policy in Policy::ALL {
            let cache = policy.build::<String, u32>(3);
            assert_eq!(cache.policy(), policy);
            assert!(cache.is_empty());
            if policy.is_bounded() {
                assert_eq!(cache.capacity(), Some(3));
            } else {
                assert_eq!(cache.capacity(), None);
            }
        }
    }
}
