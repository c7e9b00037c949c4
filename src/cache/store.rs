//! Bounded object cache.
//!
//! Capacity-limited key→value store with LRU eviction, shared by the article
//! and abstract caches.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::RwLock;

use lru::LruCache;
use metrics::counter;
use tracing::debug;

use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

const METRIC_CACHE_HIT: &str = "agora_cache_hit_total";
const METRIC_CACHE_MISS: &str = "agora_cache_miss_total";
const METRIC_CACHE_EVICT: &str = "agora_cache_evict_total";

/// Capacity-limited associative store with LRU eviction.
///
/// Values are returned by clone, so callers never hold a reference into the
/// cache. Lookups count as use for eviction ordering; when full, inserting a
/// new key removes the least recently used entry (oldest untouched entry
/// first).
pub struct BoundedCache<K, V> {
    name: &'static str,
    entries: RwLock<LruCache<K, V>>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries. The name labels
    /// log lines and metrics.
    pub fn new(name: &'static str, capacity: NonZeroUsize) -> Self {
        Self {
            name,
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Returns a copy of the cached value and marks the entry as used.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = rw_write(&self.entries, SOURCE, "get");
        match entries.get(key) {
            Some(value) => {
                counter!(METRIC_CACHE_HIT, "cache" => self.name).increment(1);
                Some(value.clone())
            }
            None => {
                counter!(METRIC_CACHE_MISS, "cache" => self.name).increment(1);
                None
            }
        }
    }

    /// Inserts or overwrites. Evicts the least recently used entry when the
    /// cache is full and `key` is new.
    pub fn put(&self, key: K, value: V) {
        let mut entries = rw_write(&self.entries, SOURCE, "put");
        if let Some((evicted_key, _)) = entries.push(key.clone(), value) {
            // push returns the displaced entry: either the old value under the
            // same key (overwrite) or the LRU victim (eviction).
            if evicted_key != key {
                counter!(METRIC_CACHE_EVICT, "cache" => self.name).increment(1);
                debug!(
                    cache = self.name,
                    "evicted least recently used entry at capacity"
                );
            }
        }
    }

    /// Deletes the entry if present; no-op when absent.
    pub fn remove(&self, key: &K) {
        rw_write(&self.entries, SOURCE, "remove").pop(key);
    }

    /// Drops every entry.
    pub fn clear(&self) {
        rw_write(&self.entries, SOURCE, "clear").clear();
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
