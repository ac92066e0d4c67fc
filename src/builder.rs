//! PairTableBuilder: validated sizing knobs for a new table.

use crate::error::ConfigError;
use crate::pair_table::PairTable;

pub(crate) const DEFAULT_CAPACITY: usize = 4096;
pub(crate) const DEFAULT_BUCKET_CAPACITY: usize = 6;
pub(crate) const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// Builds a [`PairTable`] with non-default sizing.
///
/// # Examples
///
/// ```rust
/// use pair_table::PairTable;
///
/// let mut table = PairTable::builder()
///     // Start with 64 slots instead of 4096.
///     .initial_capacity(64)
///     // Room for two entries before a bucket has to grow.
///     .bucket_capacity(2)
///     // Double the slot array once it is three quarters full.
///     .load_factor(0.75)
///     .build()
///     .expect("valid configuration");
///
/// table.put(1, 2, 100);
/// assert_eq!(table.get(1, 2), Some(100));
/// assert_eq!(table.capacity(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct PairTableBuilder {
    initial_capacity: usize,
    bucket_capacity: usize,
    load_factor: f64,
}

impl Default for PairTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PairTableBuilder {
    /// Construct a builder holding the default configuration: 4096 slots,
    /// 6 entries per new bucket, load factor 0.5.
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Sets the number of slots the table starts with.
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..self
        }
    }

    /// Sets how many entries a freshly allocated bucket can hold.
    pub fn bucket_capacity(self, entries: usize) -> Self {
        Self {
            bucket_capacity: entries,
            ..self
        }
    }

    /// Sets the ratio of entries to slots above which the table doubles.
    pub fn load_factor(self, load_factor: f64) -> Self {
        Self {
            load_factor,
            ..self
        }
    }

    /// Builds a `PairTable`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the initial capacity is not a non-zero
    /// power of two, the bucket capacity is zero, or the load factor is not
    /// a finite number in `(0.0, 1.0]`.
    pub fn build(self) -> Result<PairTable, ConfigError> {
        if !self.initial_capacity.is_power_of_two() {
            return Err(ConfigError::CapacityNotPowerOfTwo(self.initial_capacity));
        }
        if self.bucket_capacity == 0 {
            return Err(ConfigError::ZeroBucketCapacity);
        }
        if !(self.load_factor.is_finite() && self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor));
        }
        Ok(PairTable::with_config(
            self.initial_capacity,
            self.bucket_capacity,
            self.load_factor,
        ))
    }
}
