//! Error types for the ring cache.
//!
//! Construction is the only fallible step. Every other operation is total and
//! reports absence through `Option`/`bool` results instead of errors.

use thiserror::Error;

/// Error returned when a ring cache cannot be constructed.
///
/// # Example
///
/// ```
/// use ring_cache::{RingCache, RingCacheError};
///
/// let err = RingCache::<u32, u32>::new(0).unwrap_err();
/// assert_eq!(err, RingCacheError::InvalidCapacity { capacity: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingCacheError {
    /// The requested capacity was not strictly positive.
    #[error("ring cache capacity must be greater than zero, got {capacity}")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}
