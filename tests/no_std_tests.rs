#![no_std]
extern crate alloc;
extern crate ring_cache;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use ring_cache::config::RingCacheConfig;
use ring_cache::RingCache;

fn make_ring<K: core::hash::Hash + Eq + Clone, V>(cap: usize) -> RingCache<K, V> {
    RingCache::init(RingCacheConfig { capacity: cap }, None).unwrap()
}

#[test]
fn test_ring_in_no_std() {
    let mut cache = make_ring(2);

    // Using String as it requires the alloc crate
    let key1 = String::from("key1");
    let key2 = String::from("key2");
    let key3 = String::from("key3");

    cache.push(key1.clone(), 1);
    cache.push(key2.clone(), 2);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert_eq!(*cache.get(&key2).unwrap(), 2);

    // The cursor is back on key1's slot
    assert_eq!(cache.push(key3.clone(), 3), Some((key1.clone(), 1)));

    assert!(cache.get(&key1).is_none());
    assert_eq!(*cache.get(&key2).unwrap(), 2);
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn test_ring_holes_in_no_std() {
    let mut cache = make_ring(4);
    let keys: Vec<String> = (0..6).map(|i| format!("key{i}")).collect();

    for (i, key) in keys.iter().take(4).enumerate() {
        cache.push(key.clone(), i);
    }
    assert_eq!(cache.remove("key2"), Some(2));

    assert_eq!(cache.push(keys[4].clone(), 4), Some((keys[0].clone(), 0)));
    assert_eq!(cache.push(keys[5].clone(), 5), Some((keys[1].clone(), 1)));
    // Slot 2 was emptied by the removal
    assert_eq!(cache.push(keys[0].clone(), 6), None);
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_ring_drain_in_no_std() {
    let mut cache = make_ring(3);
    cache.push(String::from("a"), 1);
    cache.push(String::from("b"), 2);

    let mut drained = cache.drain();
    drained.sort();
    assert_eq!(drained, [(String::from("a"), 1), (String::from("b"), 2)]);
    assert!(cache.is_empty());
}
