//! Ring Cache Implementation
//!
//! This module provides a fixed-capacity cache whose eviction policy is driven
//! by a write cursor sweeping a ring of slots. Every operation is O(1) and the
//! cache performs no background work.
//!
//! # Algorithm
//!
//! The ring has `capacity` slots. Each push claims the slot under the cursor
//! and then advances the cursor by one, wrapping at the end of the ring:
//!
//! ```text
//!            cursor
//!              │
//!              ▼
//!   ┌─────┬─────┬─────┬─────┬─────┐
//!   │  a  │  b  │  c  │  d  │  e  │   push(f, ..) evicts c,
//!   └─────┴─────┴─────┴─────┴─────┘   binds f to slot 2, cursor → 3
//! ```
//!
//! - If the claimed slot already holds a key, that key is **evicted**.
//! - If the pushed key is already present, its old slot is freed first. The
//!   freed slot becomes a **hole** that stays empty until the cursor wraps
//!   back to it, and the cursor still advances. Re-pushing a present key can
//!   therefore evict an unrelated key.
//!
//! The ring encodes push order only. Lookups never reorder anything, so this
//! is not an LRU cache.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**: push, get, remove and contains_key are O(1) average;
//!   clear is O(capacity).
//! - **Space Complexity**: the slot array and the key index are both sized to
//!   `capacity` at construction and never grow past it.
//!
//! # Thread Safety
//!
//! [`RingCache`] is not thread-safe. For shared access with an eviction
//! callback, use `ConcurrentRingCache` (feature `concurrent`).

extern crate alloc;

use crate::config::RingCacheConfig;
use crate::error::RingCacheError;
use crate::metrics::{CacheMetrics, RingCacheMetrics};
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use log::{debug, trace, warn};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A value together with the ring slot its key is bound to.
struct Slotted<V> {
    value: V,
    slot: usize,
}

/// Internal ring segment containing the actual cache algorithm.
///
/// Shared between `RingCache` (single-threaded) and `ConcurrentRingCache`
/// (behind a reader/writer lock). The key index maps each key to both its
/// value and its slot, so the two views can never disagree in size.
pub(crate) struct RingSegment<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    cursor: usize,
    slots: Box<[Option<K>]>,
    index: HashMap<K, Slotted<V>, S>,
    metrics: RingCacheMetrics,
}

impl<K, V, S> RingSegment<K, V, S> {
    /// Builds an empty segment, rejecting a zero capacity.
    pub(crate) fn init(config: RingCacheConfig, hash_builder: S) -> Result<Self, RingCacheError> {
        let capacity = config
            .validate()
            .inspect_err(|err| warn!("rejecting ring cache config: {err}"))?;

        debug!("creating ring cache with {capacity} slots");
        Ok(RingSegment {
            capacity,
            cursor: 0,
            slots: (0..capacity.get()).map(|_| None).collect(),
            index: HashMap::with_capacity_and_hasher(capacity.get(), hash_builder),
            metrics: RingCacheMetrics::new(),
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &RingCacheMetrics {
        &self.metrics
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Empties every slot and the index and rewinds the cursor.
    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.reset_ring();
        self.metrics.record_clear();
        debug!("cleared ring cache");
    }

    fn reset_ring(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.cursor = 0;
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> RingSegment<K, V, S> {
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.get(key) {
            Some(entry) => {
                self.metrics.record_hit();
                Some(&entry.value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.get_mut(key) {
            Some(entry) => {
                self.metrics.record_hit();
                Some(&mut entry.value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    #[inline]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// Binds `key` to the slot under the cursor and advances the cursor.
    ///
    /// Returns the pair that previously occupied the claimed slot, if any.
    /// That pair never has the pushed key: a present key's old slot is freed
    /// before the cursor slot is inspected.
    pub(crate) fn push(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        // Cloning may panic, so it happens before any slot or index changes.
        let bound = key.clone();
        let cursor = self.cursor;

        let present = match self.index.get(&key) {
            Some(entry) => {
                self.slots[entry.slot] = None;
                true
            }
            None => false,
        };

        let evicted = self.slots[cursor].take().and_then(|old_key| {
            self.index
                .remove_entry(&old_key)
                .map(|(old_key, entry)| (old_key, entry.value))
        });
        if evicted.is_some() {
            self.metrics.record_eviction();
            trace!("ring slot {cursor} evicted its previous key");
        }

        self.slots[cursor] = Some(bound);
        self.index.insert(
            key,
            Slotted {
                value,
                slot: cursor,
            },
        );
        if present {
            self.metrics.record_update();
        } else {
            self.metrics.record_insertion();
        }

        self.cursor = (cursor + 1) % self.capacity.get();
        evicted
    }

    /// Unbinds `key`, leaving its slot as a hole. The cursor does not move.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, entry) = self.index.remove_entry(key)?;
        self.slots[entry.slot] = None;
        self.metrics.record_removal();
        trace!("removed key from ring slot {}", entry.slot);
        Some((key, entry.value))
    }

    /// Like [`clear`](Self::clear), but hands back every pair that was present.
    ///
    /// The pairs come out in index order, which is unspecified.
    pub(crate) fn drain(&mut self) -> Vec<(K, V)> {
        let drained: Vec<(K, V)> = self
            .index
            .drain()
            .map(|(key, entry)| (key, entry.value))
            .collect();
        self.reset_ring();
        self.metrics.record_clear();
        debug!("drained {} entries from ring cache", drained.len());
        drained
    }

    /// Verifies the slot/index invariants. Test-only.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), &'static str> {
        if self.cursor >= self.capacity.get() {
            return Err("cursor out of range");
        }
        if self.slots.len() != self.capacity.get() {
            return Err("slot array length differs from capacity");
        }
        if self.index.len() > self.capacity.get() {
            return Err("more entries than capacity");
        }
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        if occupied != self.index.len() {
            return Err("occupied slot count differs from index size");
        }
        for (slot, bound) in self.slots.iter().enumerate() {
            if let Some(key) = bound {
                match self.index.get(key) {
                    Some(entry) if entry.slot == slot => {}
                    Some(_) => return Err("index points at a different slot"),
                    None => return Err("occupied slot holds an unindexed key"),
                }
            }
        }
        Ok(())
    }
}

impl<K, V, S> core::fmt::Debug for RingSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingSegment")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// A fixed-capacity cache with cursor-driven ring eviction.
///
/// Single-threaded: mutation takes `&mut self`, and evicted or removed pairs
/// are handed straight back to the caller instead of going through a
/// callback.
///
/// # Examples
///
/// ```
/// use ring_cache::RingCache;
///
/// let mut cache = RingCache::new(2).unwrap();
///
/// assert_eq!(cache.push(1, "one"), None);
/// assert_eq!(cache.push(2, "two"), None);
///
/// // The cursor has wrapped to the slot holding 1.
/// assert_eq!(cache.push(3, "three"), Some((1, "one")));
/// assert!(!cache.contains_key(&1));
/// assert_eq!(cache.get(&3), Some(&"three"));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct RingCache<K, V, S = DefaultHashBuilder> {
    segment: RingSegment<K, V, S>,
}

impl<K, V, S> core::fmt::Debug for RingCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingCache")
            .field("segment", &self.segment)
            .finish()
    }
}

impl<K: Hash + Eq, V> RingCache<K, V, DefaultHashBuilder> {
    /// Creates a ring cache with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingCacheError> {
        Self::init(RingCacheConfig { capacity }, None)
    }

    /// Creates a ring cache from a configuration with an optional hasher.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when the configured
    /// capacity is zero.
    pub fn init(
        config: RingCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> Result<Self, RingCacheError> {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> RingCache<K, V, S> {
    /// Creates a ring cache that hashes keys with `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when the configured
    /// capacity is zero.
    pub fn init_with_hasher(config: RingCacheConfig, hash_builder: S) -> Result<Self, RingCacheError> {
        Ok(Self {
            segment: RingSegment::init(config, hash_builder)?,
        })
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.segment.capacity().get()
    }

    /// Returns the number of entries currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// Editing a value in place does not move its key in the ring.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }

    /// Removes `key` and returns its value.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key).map(|(_, value)| value)
    }

    /// Removes every entry and rewinds the cursor to the first slot.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear();
    }

    /// Removes every entry, returning them in unspecified order.
    #[inline]
    pub fn drain(&mut self) -> Vec<(K, V)> {
        self.segment.drain()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> RingCache<K, V, S> {
    /// Pushes `key` into the slot under the cursor.
    ///
    /// Returns the pair evicted from that slot, if it was occupied. A present
    /// `key` has its value overwritten and is never returned here, though the
    /// push may still evict a different key.
    #[inline]
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.segment.push(key, value)
    }
}

impl<K, V, S> CacheMetrics for RingCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
