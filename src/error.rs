//! ConfigError: rejected builder configurations.

/// The error type returned by [`PairTableBuilder::build`][build] when a
/// configuration knob is out of range.
///
/// Table operations themselves never fail.
///
/// [build]: crate::PairTableBuilder::build
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Slot indices are computed with a bit mask, so the slot count must be a
    /// non-zero power of two.
    #[error("initial capacity must be a non-zero power of two, got {0}")]
    CapacityNotPowerOfTwo(usize),

    /// Every bucket must be able to hold at least its first entry.
    #[error("bucket capacity must be at least 1")]
    ZeroBucketCapacity,

    /// The load factor must be a finite number in `(0.0, 1.0]`.
    #[error("load factor must be finite and in (0.0, 1.0], got {0}")]
    InvalidLoadFactor(f64),
}
