use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::{Error, Result};

/// Fixed-capacity least-recently-used map.
///
/// Both `get` and `set` mark the touched key most-recently-used; inserting
/// past capacity evicts exactly the entry that has gone longest without
/// either. Recency order is total, so eviction is always unambiguous.
pub struct BoundedLru<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> BoundedLru<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is a configuration error, not a silent no-op cache.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            Error::configuration(format!(
                "cache capacity must be a positive integer, got {}",
                capacity
            ))
        })?;
        Ok(Self {
            inner: LruCache::new(capacity),
        })
    }

    /// Look up `key`, refreshing its recency on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    /// Insert or overwrite `key`, marking it most-recently-used.
    pub fn set(&mut self, key: K, value: V) {
        self.inner.put(key, value);
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.cap().get()
    }
}

impl<K: Hash + Eq, V> std::fmt::Debug for BoundedLru<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedLru")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = BoundedLru::<String, u32>::new(0).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn evicts_least_recently_used_on_overflow() {
        let mut cache = BoundedLru::new(3).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.set("d", 4);
        assert_eq!(cache.len(), 3);
        assert!(cache.get(&"a").is_none());
        assert_eq!(cache.get(&"d"), Some(&4));
    }

    #[test]
    fn get_refreshes_recency() {
        // capacity 2: insert a,b; get a; insert c => b evicted, a survives
        let mut cache = BoundedLru::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.set("c", 3);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert!(cache.get(&"b").is_none());
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn overwrite_does_not_grow_and_refreshes() {
        let mut cache = BoundedLru::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 10);
        assert_eq!(cache.len(), 2);
        cache.set("c", 3);
        assert_eq!(cache.get(&"a"), Some(&10));
        assert!(cache.get(&"b").is_none());
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = BoundedLru::new(2).unwrap();
        cache.set(1, "x");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 2);
    }
}
