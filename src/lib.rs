//! Policy Cache - Bounded in-memory key-value caches
//!
//! Provides interchangeable FIFO, LIFO, LRU and MRU eviction over one shared
//! cache contract, plus an unbounded baseline.

pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod runner;

pub use cache::{Cache, Discarded, Policy, MAX_ITEMS};
pub use config::Config;
pub use error::{CacheError, Result};
pub use runner::ScriptRunner;
