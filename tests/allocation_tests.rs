//! Allocation Tests
//!
//! Storage for a ring cache is sized at construction. Once every slot has
//! been bound, lookups and same-order re-pushes must not touch the allocator.
//!
//! This file holds a single test so that no other test thread allocates
//! while a [`Region`] is being measured.

use ring_cache::RingCache;
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const CAPACITY: u64 = 1024;

#[test]
fn steady_state_does_not_allocate() {
    let mut cache: RingCache<u64, u64> = RingCache::new(CAPACITY as usize).unwrap();
    for key in 0..CAPACITY {
        cache.push(key, key);
    }

    let region = Region::new(GLOBAL);
    for round in 1..4 {
        for key in 0..CAPACITY {
            assert_eq!(cache.get(&key), Some(&(key + (round - 1) * CAPACITY)));
            // The cursor sits on this key's own slot: an update, no eviction.
            assert_eq!(cache.push(key, key + round * CAPACITY), None);
        }
    }
    let change = region.change();
    assert_eq!(change.allocations, 0);
    assert_eq!(change.reallocations, 0);
    assert_eq!(cache.len(), CAPACITY as usize);

    #[cfg(feature = "concurrent")]
    {
        let cache = ring_cache::ConcurrentRingCache::<u64, u64>::new(CAPACITY as usize).unwrap();
        for key in 0..CAPACITY {
            cache.push(key, key);
        }

        let region = Region::new(GLOBAL);
        for key in 0..CAPACITY {
            assert_eq!(cache.get(&key), Some(key));
            assert!(!cache.push(key, key + 1));
            assert!(cache.contains_key(&key));
        }
        let change = region.change();
        assert_eq!(change.allocations, 0);
        assert_eq!(change.reallocations, 0);
    }
}
