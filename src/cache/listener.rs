//! Discard Listener Module
//!
//! Emits the discard notification every bounded cache fires when it evicts.

use std::fmt;

use tracing::info;

use crate::cache::{Discarded, Policy};

/// Callback invoked synchronously with the key and value of each evicted entry.
pub type DiscardListener<K, V> = Box<dyn FnMut(&K, &V)>;

// == Discard Notifier ==
/// Fans a single eviction out to the log and the optional listener.
pub(crate) struct DiscardNotifier<K, V> {
    policy: Policy,
    listener: Option<DiscardListener<K, V>>,
}

impl<K: fmt::Debug, V> DiscardNotifier<K, V> {
    // == Constructor ==
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            listener: None,
        }
    }

    // == Set Listener ==
    /// Replaces the registered listener.
    pub fn set_listener(&mut self, listener: DiscardListener<K, V>) {
        self.listener = Some(listener);
    }

    // == Discard ==
    /// Notifies about an entry popped from the store and hands it back.
    ///
    /// Does nothing when `popped` is `None`.
    pub fn discard(&mut self, popped: Option<(K, V)>) -> Option<Discarded<K, V>> {
        let (key, value) = popped?;

        info!(target: "policy_cache::discard", policy = %self.policy, "DISCARD: {:?}", key);
        if let Some(listener) = self.listener.as_mut() {
            listener(&key, &value);
        }

        Some(Discarded { key, value })
    }
}

impl<K, V> fmt::Debug for DiscardNotifier<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscardNotifier")
            .field("policy", &self.policy)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
