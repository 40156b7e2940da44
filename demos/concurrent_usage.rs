//! Concurrent Ring Cache Usage
//!
//! Demonstrates sharing a ring cache across threads, counting evictions
//! through the callback, and a callback that calls back into the cache.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use ring_cache::metrics::CacheMetrics;
use ring_cache::ConcurrentRingCache;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use std::thread;
use std::time::Instant;

const NUM_THREADS: usize = 8;
const OPS_PER_THREAD: usize = 10_000;

fn main() {
    shared_writers();
    reentrant_callback();
}

fn shared_writers() {
    println!("=== Shared writers ===");

    let evictions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&evictions);
    let cache = Arc::new(
        ConcurrentRingCache::with_evict_callback(1_000, move |_: usize, _: usize| {
            counter.fetch_add(1, Ordering::Relaxed);
        })
        .expect("capacity is non-zero"),
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = t * OPS_PER_THREAD + i;
                    cache.push(key, i);
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer panicked");
    }

    println!(
        "{} pushes in {:?}, {} evictions reported, {} entries resident",
        NUM_THREADS * OPS_PER_THREAD,
        start.elapsed(),
        evictions.load(Ordering::Relaxed),
        cache.len()
    );
    println!("hit rate: {:.2}", cache.metrics()["hit_rate"]);
}

type Shared = Arc<OnceLock<Weak<ConcurrentRingCache<String, u32>>>>;

fn reentrant_callback() {
    println!("\n=== Callback that re-enters the cache ===");

    // Evicted keys come back under an "old:" prefix, at most once.
    let handle: Shared = Arc::new(OnceLock::new());
    let inner = Arc::clone(&handle);
    let cache = Arc::new(
        ConcurrentRingCache::with_evict_callback(2, move |key: String, value: u32| {
            println!("  evicted {key} = {value}");
            if key.starts_with("old:") {
                return;
            }
            if let Some(cache) = inner.get().and_then(Weak::upgrade) {
                cache.push(format!("old:{key}"), value);
            }
        })
        .expect("capacity is non-zero"),
    );
    if handle.set(Arc::downgrade(&cache)).is_err() {
        unreachable!("handle set twice");
    }

    for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        println!("push {key}");
        cache.push(key.to_string(), i as u32);
    }
    println!("resident: {} of {}", cache.len(), cache.capacity());
}
