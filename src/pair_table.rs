//! PairTable: slot array of lazily allocated buckets plus table-level growth.

use crate::bucket::{Bucket, Entry, Upsert};
use crate::builder::{
    PairTableBuilder, DEFAULT_BUCKET_CAPACITY, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR,
};
use crate::pairing::{pair_hash, slot_index};
use crate::stats::TableStats;

/// Value returned by [`PairTable::get_or_absent`] for a pair that is not
/// stored.
pub const ABSENT: i32 = -1;

/// Power-of-two array of slots; a slot holds no bucket until first written.
#[derive(Clone, Debug)]
struct SlotArray {
    buckets: Vec<Option<Bucket>>,
}

impl SlotArray {
    fn new(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self {
            buckets: (0..capacity).map(|_| None).collect(),
        }
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn slot_of(&self, a: i32, b: i32) -> usize {
        slot_index(pair_hash(a, b), self.capacity() - 1)
    }

    fn bucket(&self, a: i32, b: i32) -> Option<&Bucket> {
        self.buckets[self.slot_of(a, b)].as_ref()
    }

    fn upsert(&mut self, entry: Entry, bucket_capacity: usize, stats: &mut TableStats) -> Upsert {
        let slot = self.slot_of(entry.a, entry.b);
        let bucket = self.buckets[slot].get_or_insert_with(|| {
            stats.record_bucket_allocated();
            Bucket::with_capacity(bucket_capacity)
        });
        let outcome = bucket.upsert(entry);
        if let Upsert::Inserted { grew: true } = outcome {
            stats.record_bucket_growth();
            #[cfg(feature = "logging")]
            log::trace!(
                "bucket at slot {} grew to {} entries",
                slot,
                bucket.capacity()
            );
        }
        outcome
    }
}

/// An open-hashing table from ordered `(i32, i32)` pairs to `i32` values.
///
/// - Slots are chosen by [`pair_hash`] masked to the slot count, which is
///   always a power of two.
/// - Each slot lazily holds a bucket: a growable block of entries scanned
///   linearly on lookup. A bucket doubles its storage only when an append
///   would overflow it.
/// - After any insertion that pushes `len` above `capacity * load_factor`,
///   the slot array doubles and every entry is re-placed.
///
/// There is no removal of single entries; [`clear`](Self::clear) drops them
/// all at once. Every operation is total: there is nothing to fail on.
///
/// The table does no internal locking. Mutation takes `&mut self`; callers
/// sharing a table across threads wrap it in their own lock.
///
/// # Examples
///
/// ```rust
/// use pair_table::PairTable;
///
/// let mut table = PairTable::new();
/// table.put(1, 2, 100);
/// table.put(2, 1, 200);
/// table.put(1, 2, 150);
///
/// assert_eq!(table.get(1, 2), Some(150));
/// assert_eq!(table.get(2, 1), Some(200));
/// assert_eq!(table.get(3, 3), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct PairTable {
    slots: SlotArray,
    len: usize,
    bucket_capacity: usize,
    load_factor: f64,
    resize_threshold: usize,
    stats: TableStats,
}

impl Default for PairTable {
    fn default() -> Self {
        Self::new()
    }
}

fn resize_threshold(capacity: usize, load_factor: f64) -> usize {
    // `len > capacity * load_factor` is the same as `len > floor(...)` for integer `len`.
    (capacity as f64 * load_factor) as usize
}

impl PairTable {
    /// Create an empty table with 4096 slots, 6 entries per new bucket and a
    /// load factor of 0.5.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CAPACITY, DEFAULT_BUCKET_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Start configuring a table with non-default sizing.
    pub fn builder() -> PairTableBuilder {
        PairTableBuilder::new()
    }

    pub(crate) fn with_config(capacity: usize, bucket_capacity: usize, load_factor: f64) -> Self {
        Self {
            slots: SlotArray::new(capacity),
            len: 0,
            bucket_capacity,
            load_factor,
            resize_threshold: resize_threshold(capacity, load_factor),
            stats: TableStats::default(),
        }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of slots. Only ever doubles; `clear` keeps it.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Snapshot of this table's diagnostic counters.
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    /// Store `value` under `(a, b)`, overwriting any previous value for the
    /// same pair.
    ///
    /// Appending may first grow the target bucket. If the new entry brings
    /// the table above its load factor, the slot array doubles (repeatedly,
    /// until the load factor holds again) and all entries are redistributed
    /// before this returns.
    pub fn put(&mut self, a: i32, b: i32, value: i32) {
        let entry = Entry { a, b, value };
        match self.slots.upsert(entry, self.bucket_capacity, &mut self.stats) {
            Upsert::Replaced => {}
            Upsert::Inserted { .. } => {
                self.len += 1;
                // Low load factors on small tables can need more than one doubling.
                while self.len > self.resize_threshold {
                    self.grow_table();
                }
            }
        }
    }

    /// Value stored under `(a, b)`, if any.
    pub fn get(&self, a: i32, b: i32) -> Option<i32> {
        self.slots.bucket(a, b)?.get(a, b)
    }

    /// Value stored under `(a, b)`, or [`ABSENT`] when the pair is missing.
    ///
    /// A stored value equal to `ABSENT` cannot be told apart from a missing
    /// pair through this method; use [`get`](Self::get) when `-1` is a
    /// legitimate value.
    pub fn get_or_absent(&self, a: i32, b: i32) -> i32 {
        self.get(a, b).unwrap_or(ABSENT)
    }

    pub fn contains(&self, a: i32, b: i32) -> bool {
        self.get(a, b).is_some()
    }

    /// Drop every entry. The slot count is kept at its current, possibly
    /// grown, value and the diagnostic counters are left untouched.
    pub fn clear(&mut self) {
        self.slots = SlotArray::new(self.slots.capacity());
        self.len = 0;
    }

    /// Iterate over `(a, b, value)` for every stored pair, in slot order and
    /// then in insertion order within a bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    // Stop-the-world rehash into twice as many slots. Entries go through the
    // regular upsert path, so buckets are allocated and grown as usual.
    fn grow_table(&mut self) {
        let capacity = self.slots.capacity() * 2;
        let old = std::mem::replace(&mut self.slots, SlotArray::new(capacity));
        self.stats.record_table_resize();

        for bucket in old.buckets.into_iter().flatten() {
            for entry in bucket.into_entries() {
                let outcome = self
                    .slots
                    .upsert(entry, self.bucket_capacity, &mut self.stats);
                debug_assert!(matches!(outcome, Upsert::Inserted { .. }));
            }
        }
        self.resize_threshold = resize_threshold(capacity, self.load_factor);

        #[cfg(feature = "logging")]
        log::debug!(
            "pair table resized from {} to {} slots holding {} entries",
            capacity / 2,
            capacity,
            self.len
        );
    }

    /// Check structural invariants; panics with a description on violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use std::collections::HashSet;

        assert!(self.capacity().is_power_of_two(), "capacity not a power of two");
        assert!(
            self.len <= self.resize_threshold,
            "len {} above threshold {}",
            self.len,
            self.resize_threshold
        );
        let mut seen = HashSet::new();
        let mut total = 0;
        for (slot, bucket) in self.slots.buckets.iter().enumerate() {
            let Some(bucket) = bucket else { continue };
            assert!(bucket.len() <= bucket.capacity(), "bucket over capacity");
            for e in bucket.iter() {
                assert_eq!(self.slots.slot_of(e.a, e.b), slot, "entry in wrong slot");
                assert!(seen.insert((e.a, e.b)), "duplicate pair ({}, {})", e.a, e.b);
                total += 1;
            }
        }
        assert_eq!(total, self.len, "len out of sync with buckets");
    }
}

/// Iterator over the entries of a [`PairTable`].
pub struct Iter<'a> {
    slots: core::slice::Iter<'a, Option<Bucket>>,
    current: Option<core::slice::Iter<'a, Entry>>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some((e.a, e.b, e.value));
            }
            match self.slots.next()? {
                Some(bucket) => self.current = Some(bucket.iter()),
                None => continue,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PairTable {
    type Item = (i32, i32, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(i32, i32, i32)> for PairTable {
    fn extend<T: IntoIterator<Item = (i32, i32, i32)>>(&mut self, iter: T) {
        for (a, b, value) in iter {
            self.put(a, b, value);
        }
    }
}

impl FromIterator<(i32, i32, i32)> for PairTable {
    fn from_iter<T: IntoIterator<Item = (i32, i32, i32)>>(iter: T) -> Self {
        let mut table = PairTable::new();
        table.extend(iter);
        table
    }
}
