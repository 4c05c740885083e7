//! Configuration Module
//!
//! Handles loading cache settings from environment variables.

use std::env;
use std::fmt::Debug;
use std::hash::Hash;

use crate::cache::{Cache, Policy, MAX_ITEMS};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries a bounded cache can hold
    pub max_items: usize,
    /// Eviction policy of the cache to build
    pub policy: Policy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Cache capacity, at least 1 (default: 4)
    /// - `CACHE_POLICY` - One of basic, fifo, lifo, lru, mru (default: fifo)
    pub fn from_env() -> Result<Self> {
        let max_items = match env::var("MAX_ITEMS") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => MAX_ITEMS,
        };
        let policy = match env::var("CACHE_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => Policy::Fifo,
        };

        Ok(Self { max_items, policy })
    }

    /// Builds an empty cache from this configuration.
    pub fn build_cache<K, V>(&self) -> Box<dyn Cache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + 'static,
        V: 'static,
    {
        self.policy.build(self.max_items)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            policy: Policy::Fifo,
        }
    }
}

fn parse_capacity(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(CacheError::InvalidCapacity(
            "capacity must be at least 1".to_string(),
        )),
        Ok(capacity) => Ok(capacity),
        Err(_) => Err(CacheError::InvalidCapacity(format!(
            "'{}' is not a positive integer",
            raw
        ))),
    }
}
