// crates/tripgeo-core/src/cache.rs

//! Bounded in-memory cache with a pluggable eviction policy.
//!
//! This is an explicit, injectable component — callers own an instance
//! and decide what to key it by; there is no module-level singleton.
//! The default policy evicts the key that was inserted first
//! (FIFO-by-insertion-order) once the fixed capacity is reached.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Default capacity used by [`BoundedCache::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Decides which key to evict when the cache is full.
///
/// The cache notifies the policy on every insertion of a *new* key and
/// asks it for a victim when capacity is exceeded. Re-inserting an
/// existing key replaces the value without consulting the policy.
pub trait EvictionPolicy<K>: Send {
    /// Record that `key` was inserted.
    fn on_insert(&mut self, key: K);

    /// Pick and forget the next key to evict, if any.
    fn victim(&mut self) -> Option<K>;
}

/// Evicts keys in their original insertion order.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: VecDeque<K>,
}

// Manual impl: a derived Default would require `K: Default`.
impl<K> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }
}

impl<K: Send> EvictionPolicy<K> for FifoPolicy<K> {
    fn on_insert(&mut self, key: K) {
        self.order.push_back(key);
    }

    fn victim(&mut self) -> Option<K> {
        self.order.pop_front()
    }
}

/// A fixed-capacity map evicting entries per its [`EvictionPolicy`].
pub struct BoundedCache<K, V, P = FifoPolicy<K>>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    capacity: usize,
    entries: HashMap<K, V>,
    policy: P,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Send,
{
    /// FIFO cache with the given capacity. A capacity of `0` caches
    /// nothing.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, FifoPolicy::default())
    }
}

impl<K, V, P> BoundedCache<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    /// Cache with a custom eviction strategy.
    pub fn with_policy(capacity: usize, policy: P) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            policy,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert `value` under `key`, evicting per policy if the cache is
    /// at capacity. Replacing an existing key keeps its original
    /// insertion position.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return;
        }
        while self.entries.len() >= self.capacity {
            match self.policy.victim() {
                Some(victim) => {
                    self.entries.remove(&victim);
                }
                None => break,
            }
        }
        self.policy.on_insert(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop every entry and reset the eviction policy's bookkeeping.
    pub fn clear(&mut self) {
        while self.policy.victim().is_some() {}
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
