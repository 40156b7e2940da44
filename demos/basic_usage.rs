//! Basic Ring Cache Usage
//!
//! Walks through the eviction order of the single-threaded ring cache and
//! prints its metrics.
//!
//! Run with: cargo run --example basic_usage

use ring_cache::config::RingCacheConfig;
use ring_cache::metrics::CacheMetrics;
use ring_cache::{RingCache, RingCacheError};

fn main() -> Result<(), RingCacheError> {
    let mut cache = RingCache::init(RingCacheConfig { capacity: 3 }, None)?;

    println!("Pushing a, b, c into a 3-slot ring");
    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        assert!(cache.push(key, value).is_none());
    }

    println!("Re-pushing b frees its slot and claims the cursor slot:");
    if let Some((key, value)) = cache.push("b", 20) {
        println!("  evicted {key} = {value}");
    }
    println!("  len is now {} of {}", cache.len(), cache.capacity());

    println!("Pushing d fills the hole b left behind:");
    match cache.push("d", 4) {
        Some((key, value)) => println!("  evicted {key} = {value}"),
        None => println!("  nothing evicted"),
    }

    println!("Pushing e evicts the oldest slot:");
    if let Some((key, value)) = cache.push("e", 5) {
        println!("  evicted {key} = {value}");
    }

    for key in ["a", "b", "c", "d", "e"] {
        match cache.get(key) {
            Some(value) => println!("  {key} -> {value}"),
            None => println!("  {key} -> (absent)"),
        }
    }

    println!("\n{} metrics:", cache.algorithm_name());
    for (name, value) in cache.metrics() {
        println!("  {name:<14} {value:.2}");
    }

    if let Err(err) = RingCache::<u32, u32>::new(0) {
        println!("\nzero capacity: {err}");
    }

    Ok(())
}
