//! Stress Tests for the Concurrent Ring Cache
//!
//! These tests verify thread safety and the size/callback accounting under
//! high contention.

#![cfg(feature = "concurrent")]

use ring_cache::config::RingCacheConfig;
use ring_cache::metrics::CacheMetrics;
use ring_cache::{ConcurrentRingCache, EvictCallback};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 16;
const OPS_PER_THREAD: usize = 10_000;

fn counting_cache(capacity: usize) -> (Arc<ConcurrentRingCache<usize, usize>>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let on_evict: EvictCallback<usize, usize> = Box::new(move |_, _| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    let cache = ConcurrentRingCache::init(RingCacheConfig { capacity }, None, Some(on_evict))
        .expect("non-zero capacity");
    (Arc::new(cache), calls)
}

/// Test high contention with many threads hammering the same keys
#[test]
fn stress_ring_high_contention() {
    let (cache, _) = counting_cache(100);

    let mut handles = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                let key = i % 10; // Only 10 keys for high contention
                if t % 2 == 0 {
                    cache.push(key, t * OPS_PER_THREAD + i);
                } else {
                    let _ = cache.get(&key);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert!(cache.len() <= 10);
}

/// Distinct keys per thread: every push either fills a free slot or evicts
#[test]
fn stress_ring_size_matches_callbacks() {
    let capacity = 1000;
    let (cache, calls) = counting_cache(capacity);

    let mut handles = Vec::new();
    for t in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                cache.push(t * OPS_PER_THREAD + i, i);
                assert!(cache.len() <= capacity);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let pushed = 8 * OPS_PER_THREAD;
    assert_eq!(cache.len(), pushed - calls.load(Ordering::Relaxed));
    assert_eq!(cache.len(), capacity);
}

/// Mixed push/remove/get traffic keeps size and callbacks in balance
#[test]
fn stress_ring_mixed_operations() {
    let (cache, calls) = counting_cache(64);

    let mut handles = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD / 10 {
                let key = (t * 31 + i * 7) % 256;
                match i % 4 {
                    0 | 1 => {
                        cache.push(key, i);
                    }
                    2 => {
                        cache.remove(&key);
                    }
                    _ => {
                        let _ = cache.get(&key);
                    }
                }
                assert!(cache.len() <= 64);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let metrics = cache.metrics();
    let insertions = metrics["insertions"] as usize;
    let callbacks = calls.load(Ordering::Relaxed);
    assert_eq!(cache.len(), insertions - callbacks);
    assert_eq!(
        metrics["evictions"] as usize + metrics["removals"] as usize,
        callbacks
    );
}

/// Test edge case: empty cache operations
#[test]
fn stress_ring_empty_cache() {
    let (cache, calls) = counting_cache(100);

    let mut handles = Vec::new();
    for _ in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                let _ = cache.get(&i);
                let _ = cache.remove(&i);
                cache.clear();
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert!(cache.is_empty());
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

/// Concurrent clears race against pushes; every dropped pair is reported once
#[test]
fn stress_ring_clear_during_pushes() {
    let (cache, calls) = counting_cache(50);

    let mut handles = Vec::new();
    for t in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                cache.push(t * OPS_PER_THREAD + i, i);
            }
        }));
    }
    {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                cache.clear();
                thread::yield_now();
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(cache.len(), 4 * OPS_PER_THREAD - calls.load(Ordering::Relaxed));
}
