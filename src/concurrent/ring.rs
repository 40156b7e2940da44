//! Concurrent Ring Cache Implementation
//!
//! A thread-safe ring cache guarded by a single reader/writer lock, with an
//! optional eviction callback that runs after the lock is released. This is
//! the multi-threaded counterpart to [`RingCache`](crate::RingCache).
//!
//! # Locking
//!
//! | Operation | Lock |
//! |-----------|------|
//! | `push`, `remove`, `clear` | exclusive |
//! | `get`, `get_with`, `contains_key`, `len`, `is_empty` | shared |
//! | `capacity` | none |
//!
//! # Example
//!
//! ```rust
//! use ring_cache::ConcurrentRingCache;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let evicted = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&evicted);
//! let cache = ConcurrentRingCache::with_evict_callback(2, move |_key: u32, _value: &'static str| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! })
//! .unwrap();
//!
//! assert!(!cache.push(1, "one"));
//! assert!(!cache.push(2, "two"));
//! assert!(cache.push(3, "three"));
//!
//! assert_eq!(evicted.load(Ordering::Relaxed), 1);
//! assert!(!cache.contains_key(&1));
//! assert_eq!(cache.get(&3), Some("three"));
//! ```

extern crate alloc;

use crate::config::RingCacheConfig;
use crate::error::RingCacheError;
use crate::metrics::CacheMetrics;
use crate::ring::RingSegment;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::RwLock;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// Callback invoked with each evicted or removed pair.
///
/// Runs on the thread that triggered the eviction, after the cache lock has
/// been released.
pub type EvictCallback<K, V> = Box<dyn Fn(K, V) + Send + Sync>;

/// A thread-safe ring cache.
///
/// All state lives behind one `parking_lot::RwLock`. Lookups share the lock;
/// mutations take it exclusively. The optional eviction callback fires once
/// per pair evicted by `push`, removed by `remove`, or dropped by `clear`,
/// always after the lock is released and before the triggering call returns.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. `get` additionally requires `Clone`.
/// - `S`: Hash builder type. Defaults to `DefaultHashBuilder`.
///
/// # Example
///
/// ```rust
/// use ring_cache::ConcurrentRingCache;
/// use std::sync::Arc;
/// use std::thread;
///
/// let cache = Arc::new(ConcurrentRingCache::new(1024).unwrap());
///
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 cache.push(t * 1000 + i, i);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(cache.len(), 400);
/// ```
pub struct ConcurrentRingCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    segment: RwLock<RingSegment<K, V, S>>,
    on_evict: Option<EvictCallback<K, V>>,
}

impl<K, V> ConcurrentRingCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
{
    /// Creates a concurrent ring cache with `capacity` slots and no callback.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingCacheError> {
        Self::init(RingCacheConfig { capacity }, None, None)
    }

    /// Creates a concurrent ring cache that reports every evicted or removed
    /// pair to `on_evict`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_evict_callback<F>(capacity: usize, on_evict: F) -> Result<Self, RingCacheError>
    where
        F: Fn(K, V) + Send + Sync + 'static,
    {
        Self::init(RingCacheConfig { capacity }, None, Some(Box::new(on_evict)))
    }

    /// Creates a concurrent ring cache from a configuration, an optional
    /// hasher and an optional eviction callback.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when the configured
    /// capacity is zero.
    pub fn init(
        config: RingCacheConfig,
        hasher: Option<DefaultHashBuilder>,
        on_evict: Option<EvictCallback<K, V>>,
    ) -> Result<Self, RingCacheError> {
        Self::init_with_hasher(config, hasher.unwrap_or_default(), on_evict)
    }
}

impl<K, V, S> ConcurrentRingCache<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Creates a concurrent ring cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when the configured
    /// capacity is zero.
    pub fn init_with_hasher(
        config: RingCacheConfig,
        hash_builder: S,
        on_evict: Option<EvictCallback<K, V>>,
    ) -> Result<Self, RingCacheError> {
        let segment = RingSegment::init(config, hash_builder)?;
        Ok(Self {
            capacity: segment.capacity(),
            segment: RwLock::new(segment),
            on_evict,
        })
    }

    /// Returns the fixed number of slots. Takes no lock.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.segment.read().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.read().is_empty()
    }

    /// Returns `true` if an eviction callback is installed.
    pub fn has_evict_callback(&self) -> bool {
        self.on_evict.is_some()
    }

    /// Retrieves a clone of the value for `key`.
    ///
    /// For operations that don't need ownership, use
    /// [`get_with()`](Self::get_with) instead.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.segment.read().get(key).cloned()
    }

    /// Applies `f` to the value for `key` while holding the shared lock.
    ///
    /// `f` must not call mutating methods on this cache: the shared lock is
    /// still held while it runs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ring_cache::ConcurrentRingCache;
    ///
    /// let cache = ConcurrentRingCache::new(4).unwrap();
    /// cache.push("key", String::from("hello world"));
    /// assert_eq!(cache.get_with("key", |value| value.len()), Some(11));
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.read().get(key).map(f)
    }

    /// Checks if the cache contains `key`. Does not touch metrics.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.read().contains_key(key)
    }

    /// Pushes `key` into the slot under the cursor.
    ///
    /// Returns `true` if the slot held another key, which is evicted and
    /// passed to the callback. Pushing a present key overwrites its value and
    /// never reports that key as evicted.
    pub fn push(&self, key: K, value: V) -> bool {
        let evicted = {
            let mut segment = self.segment.write();
            segment.push(key, value)
        };

        match evicted {
            Some((key, value)) => {
                self.notify(key, value);
                true
            }
            None => false,
        }
    }

    /// Removes `key`, returning `true` if it was present.
    ///
    /// The removed pair is passed to the callback.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let removed = {
            let mut segment = self.segment.write();
            segment.remove(key)
        };

        match removed {
            Some((key, value)) => {
                self.notify(key, value);
                true
            }
            None => false,
        }
    }

    /// Removes every entry and rewinds the cursor.
    ///
    /// With a callback installed, it is invoked once per removed pair in
    /// unspecified order.
    pub fn clear(&self) {
        let drained = {
            let mut segment = self.segment.write();
            if self.on_evict.is_some() && !segment.is_empty() {
                segment.drain()
            } else {
                segment.clear();
                Vec::new()
            }
        };

        for (key, value) in drained {
            self.notify(key, value);
        }
    }

    /// Runs the callback. Callers must not hold the lock.
    fn notify(&self, key: K, value: V) {
        if let Some(on_evict) = &self.on_evict {
            on_evict(key, value);
        }
    }
}

impl<K, V, S> CacheMetrics for ConcurrentRingCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.read().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentRing"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentRingCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut debug = f.debug_struct("ConcurrentRingCache");
        // A reader may already hold the lock, e.g. inside `get_with`.
        match self.segment.try_read() {
            Some(segment) => debug.field("segment", &*segment),
            None => debug.field("segment", &format_args!("<locked>")),
        };
        debug.field("on_evict", &self.on_evict.is_some()).finish()
    }
}
