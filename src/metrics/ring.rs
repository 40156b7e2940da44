//! Ring Cache Metrics
//!
//! Counters specific to the ring cache. Evictions caused by slot reuse and
//! explicit removals are tracked separately since both reach the eviction
//! callback.

extern crate alloc;

use super::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::sync::atomic::{AtomicU64, Ordering};

/// Counters collected by a ring cache.
///
/// All recorders take `&self` and use relaxed atomics; the counters are
/// statistics, not synchronization.
#[derive(Debug, Default)]
pub struct RingCacheMetrics {
    requests: AtomicU64,
    cache_hits: AtomicU64,
    insertions: AtomicU64,
    updates: AtomicU64,
    evictions: AtomicU64,
    removals: AtomicU64,
    clears: AtomicU64,
}

impl RingCacheMetrics {
    /// Creates a zeroed metrics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    #[inline]
    pub fn record_hit(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    #[inline]
    pub fn record_miss(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a push of a key that was not yet present.
    #[inline]
    pub fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a push that overwrote the value of a present key.
    #[inline]
    pub fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a key pushed out because the cursor reused its slot.
    #[inline]
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an explicit removal of a present key.
    #[inline]
    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a clear of the whole ring.
    #[inline]
    pub fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    /// Total lookups.
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Lookups that found their key.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests().saturating_sub(self.cache_hits())
    }

    /// Pushes of new keys.
    pub fn insertions(&self) -> u64 {
        self.insertions.load(Ordering::Relaxed)
    }

    /// Pushes that overwrote an existing key.
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    /// Keys evicted by slot reuse.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Keys removed explicitly.
    pub fn removals(&self) -> u64 {
        self.removals.load(Ordering::Relaxed)
    }

    /// Number of clears.
    pub fn clears(&self) -> u64 {
        self.clears.load(Ordering::Relaxed)
    }

    /// Hit rate in `[0.0, 1.0]`, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let requests = self.requests();
        if requests > 0 {
            self.cache_hits() as f64 / requests as f64
        } else {
            0.0
        }
    }

    /// Miss rate in `[0.0, 1.0]`, or 0.0 before any lookup.
    pub fn miss_rate(&self) -> f64 {
        let requests = self.requests();
        if requests > 0 {
            self.cache_misses() as f64 / requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of pushes that evicted another key, or 0.0 before any push.
    pub fn eviction_rate(&self) -> f64 {
        let pushes = self.insertions() + self.updates();
        if pushes > 0 {
            self.evictions() as f64 / pushes as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits() as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("clears".to_string(), self.clears() as f64);
        metrics.insert("evictions".to_string(), self.evictions() as f64);
        metrics.insert("insertions".to_string(), self.insertions() as f64);
        metrics.insert("removals".to_string(), self.removals() as f64);
        metrics.insert("requests".to_string(), self.requests() as f64);
        metrics.insert("updates".to_string(), self.updates() as f64);

        metrics.insert("eviction_rate".to_string(), self.eviction_rate());
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

impl CacheMetrics for RingCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "Ring"
    }
}
