//! Cache Metrics System
//!
//! Provides a metrics system for the ring cache using BTreeMap-based metrics
//! reporting. Counters are atomic so that read paths holding only a shared
//! lock can still record hits and misses.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap keeps metric keys in a deterministic order, so reports are
//! reproducible across runs and easy to diff in tests and benchmarks.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;

pub mod ring;

pub use ring::RingCacheMetrics;

/// Trait that cache types implement for metrics reporting
///
/// Provides a uniform interface for retrieving metrics from the single-threaded
/// and concurrent ring caches.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    ///
    /// Keys are sorted alphabetically for consistent output.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification
    ///
    /// # Returns
    /// A static string identifying the cache (e.g., "Ring", "ConcurrentRing")
    fn algorithm_name(&self) -> &'static str;
}
