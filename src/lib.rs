#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Description | Best Use Case |
//! |------|-------------|---------------|
//! | [`RingCache`] | Single-threaded ring cache | Owned caches, evictions returned to the caller |
//! | `ConcurrentRingCache` | Lock-protected ring cache with eviction callback | Shared caches, evictions pushed to a hook |
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Lock (concurrent) |
//! |-----------|------|-------------------|
//! | push      | O(1) | exclusive |
//! | get       | O(1) | shared    |
//! | remove    | O(1) | exclusive |
//! | clear     | O(capacity) | exclusive |
//! | len       | O(1) | shared    |
//! | capacity  | O(1) | none      |
//!
//! ## Eviction Order
//!
//! ```text
//!   capacity = 3, cursor ▼
//!
//!   push a, b, c        ▼
//!                     [ a | b | c ]
//!
//!   push b (present)        ▼          b's old slot becomes a hole,
//!                     [ b | _ | c ]    a is evicted from the cursor slot
//!
//!   push d                      ▼      the hole is filled, nothing evicted
//!                     [ b | d | c ]
//!
//!   push e              ▼              c is evicted
//!                     [ b | d | e ]
//! ```
//!
//! ## Code Examples
//!
//! ### Single-threaded
//!
//! ```rust
//! use ring_cache::RingCache;
//! use ring_cache::config::RingCacheConfig;
//!
//! let mut cache = RingCache::init(RingCacheConfig { capacity: 2 }, None).unwrap();
//! cache.push("a", 1);
//! cache.push("b", 2);
//! assert_eq!(cache.push("c", 3), Some(("a", 1)));
//! assert!(cache.get(&"a").is_none());
//! ```
//!
//! ### Concurrent with an eviction callback
//!
//! ```rust
//! use ring_cache::ConcurrentRingCache;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let cache = ConcurrentRingCache::with_evict_callback(1, move |key: &'static str, value: i32| {
//!     tx.send((key, value)).unwrap();
//! })
//! .unwrap();
//!
//! cache.push("a", 1);
//! assert!(cache.push("b", 2));
//! assert_eq!(rx.try_recv(), Ok(("a", 1)));
//! ```
//!
//! ## Modules
//!
//! - [`ring`]: Ring cache algorithm and the single-threaded cache
//! - [`config`]: Configuration structure
//! - [`error`]: Construction errors
//! - [`metrics`]: Metrics collection for cache monitoring
//! - `concurrent`: Thread-safe ring cache (requires `concurrent` feature)

#![no_std]

#[cfg(any(feature = "std", not(feature = "hashbrown")))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Cache configuration structures.
///
/// Provides the configuration struct shared by both cache front ends.
pub mod config;

/// Construction error type.
pub mod error;

/// Ring cache implementation.
///
/// Provides the slot ring, the key index and the cursor-driven eviction
/// algorithm, plus the single-threaded [`RingCache`].
pub mod ring;

/// Cache metrics system.
///
/// Provides counters and a common reporting trait for both cache front ends.
pub mod metrics;

/// Concurrent cache implementations.
///
/// Provides the thread-safe ring cache with its post-unlock eviction callback.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use error::RingCacheError;
pub use ring::RingCache;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentRingCache, EvictCallback};
