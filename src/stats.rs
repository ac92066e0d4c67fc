//! TableStats: per-table diagnostic counters.

use std::fmt::{self, Debug};

/// Diagnostic counters of a single [`PairTable`][crate::PairTable].
///
/// Counters are incremented according to the following rules:
///
/// - `table_resizes`: each time the slot array doubles.
/// - `buckets_allocated`: each time an insertion lands in an empty slot,
///   including insertions made while redistributing entries during a table
///   resize.
/// - `bucket_growths`: each time a bucket's backing storage is enlarged
///   because an append would overflow it, during resizes as well.
///
/// Counters are never reset, not even by `clear`. They are monitoring aids
/// and have no effect on lookups.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct TableStats {
    table_resizes: u64,
    buckets_allocated: u64,
    bucket_growths: u64,
}

impl Debug for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStats")
            .field("table_resizes", &self.table_resizes)
            .field("buckets_allocated", &self.buckets_allocated)
            .field("bucket_growths", &self.bucket_growths)
            .finish()
    }
}

impl TableStats {
    /// Number of times the slot array doubled.
    pub fn table_resizes(&self) -> u64 {
        self.table_resizes
    }

    /// Number of buckets created on first insertion into an empty slot.
    pub fn buckets_allocated(&self) -> u64 {
        self.buckets_allocated
    }

    /// Number of times a bucket's backing storage was enlarged.
    pub fn bucket_growths(&self) -> u64 {
        self.bucket_growths
    }

    pub(crate) fn record_table_resize(&mut self) {
        self.table_resizes = self.table_resizes.saturating_add(1);
    }

    pub(crate) fn record_bucket_allocated(&mut self) {
        self.buckets_allocated = self.buckets_allocated.saturating_add(1);
    }

    pub(crate) fn record_bucket_growth(&mut self) {
        self.bucket_growths = self.bucket_growths.saturating_add(1);
    }
}
