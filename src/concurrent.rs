//! Concurrent Cache Implementations
//!
//! This module provides the thread-safe ring cache.
//!
//! # Architecture
//!
//! Unlike a striped cache, the ring is one indivisible structure: a single
//! cursor orders every push across all keys, so the whole ring sits behind one
//! `parking_lot::RwLock`.
//!
//! ## Why RwLock Instead of Mutex?
//!
//! Lookups in a ring cache never touch the ring. `get`, `contains_key` and
//! `len` only read the key index, so they take the shared side of the lock
//! and run in parallel. Only `push`, `remove` and `clear` need the exclusive
//! side. Hit/miss counters are atomics and do not need the write lock.
//!
//! ## Eviction Callbacks
//!
//! A cache may carry an eviction callback. Mutating operations collect the
//! evicted or removed pairs while holding the write lock, release it, and only
//! then invoke the callback:
//!
//! ```text
//!   push / remove / clear
//!   ┌──────────────────────────────┐
//!   │ write lock                   │
//!   │   update ring + index        │
//!   │   collect evicted pairs      │
//!   └──────────────┬───────────────┘
//!                  │ unlock
//!                  ▼
//!   on_evict(key, value) for each pair      ◀── may call back into the cache
//!                  │
//!                  ▼
//!               return
//! ```
//!
//! Because no lock is held while the callback runs, the callback may call any
//! method on the same cache, mutating ones included.
//!
//! # Available Concurrent Caches
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConcurrentRingCache`] | Thread-safe ring cache with an optional eviction callback |
//!
//! # Thread Safety
//!
//! `ConcurrentRingCache` is `Send + Sync` whenever its keys, values and hasher
//! are, and can be shared via `Arc` or scoped borrows.

mod ring;

pub use self::ring::{ConcurrentRingCache, EvictCallback};
