//! Cache Module
//!
//! Bounded in-memory caches sharing one contract and differing only in the
//! entry they discard when full.

mod basic;
mod entry;
mod fifo;
mod lifo;
mod listener;
mod lru;
mod mru;
mod order;
mod policy;
mod snapshot;
mod traits;


// Re-export public types
pub use basic::BasicCache;
pub use entry::Discarded;
pub use fifo::FifoCache;
pub use lifo::LifoCache;
pub use listener::DiscardListener;
pub use lru::LruCache;
pub use mru::MruCache;
pub use order::OrderedStore;
pub use policy::Policy;
pub use snapshot::{CacheSnapshot, SnapshotEntry};
pub use traits::Cache;

// == Public Constants ==
/// Default number of entries a bounded cache holds
pub const MAX_ITEMS: usize = 4;
