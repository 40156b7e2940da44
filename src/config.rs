//! Cache Configuration Module
//!
//! This module provides the configuration structure for the ring cache.
//!
//! # Design Philosophy
//!
//! The configuration struct has public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Validated once**: The capacity is checked when a cache is built from it
//! - **No boilerplate**: No builder methods needed
//!
//! # Sizing Guidelines
//!
//! The ring holds at most `capacity` entries. Every slot is allocated up front
//! and the key index is pre-sized to `capacity`, so memory use is fixed at
//! construction:
//!
//! ```text
//! Total Memory ≈ capacity × (2 × size_of::<K>() + size_of::<V>() + size_of::<usize>() + overhead)
//! ```
//!
//! Each key is stored twice (once in its slot, once in the index), so prefer
//! cheap to clone keys such as integers or `Arc<str>` for large rings.
//!
//! # Examples
//!
//! ```
//! use ring_cache::config::RingCacheConfig;
//! use ring_cache::RingCache;
//!
//! let config = RingCacheConfig { capacity: 1000 };
//! let cache: RingCache<String, i32> = RingCache::init(config, None).unwrap();
//! assert_eq!(cache.capacity(), 1000);
//! ```

use crate::error::RingCacheError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for a ring cache.
///
/// Shared by [`RingCache`](crate::RingCache) and, with the `concurrent`
/// feature, `ConcurrentRingCache`.
///
/// # Fields
///
/// - `capacity`: Number of slots in the ring, and therefore the maximum number
///   of entries. Must be greater than zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RingCacheConfig {
    /// Number of ring slots. Fixed for the lifetime of the cache.
    pub capacity: usize,
}

impl RingCacheConfig {
    /// Checks the configuration and returns the capacity as a `NonZeroUsize`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn validate(&self) -> Result<NonZeroUsize, RingCacheError> {
        NonZeroUsize::new(self.capacity).ok_or(RingCacheError::InvalidCapacity {
            capacity: self.capacity,
        })
    }
}

impl fmt::Debug for RingCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_config_creation() {
        let config = RingCacheConfig { capacity: 1000 };
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.validate().map(NonZeroUsize::get), Ok(1000));
    }

    #[test]
    fn test_ring_config_rejects_zero() {
        let config = RingCacheConfig { capacity: 0 };
        assert_eq!(
            config.validate(),
            Err(RingCacheError::InvalidCapacity { capacity: 0 })
        );
    }
}
