//! Bucket: the growable block of entries stored behind one slot.

/// One stored `(a, b) -> value` record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub a: i32,
    pub b: i32,
    pub value: i32,
}

/// Outcome of writing an entry into a bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Upsert {
    /// The pair was already present; its value was overwritten.
    Replaced,
    /// The pair was appended. `grew` is set when the backing storage had to
    /// be enlarged first.
    Inserted { grew: bool },
}

/// Entries sharing one slot, in append order.
///
/// `capacity` is the logical size of the backing block. It only changes when
/// an append finds the block full, and then it doubles; `entries.len()`
/// never exceeds it.
#[derive(Clone, Debug)]
pub(crate) struct Bucket {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Bucket {
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, a: i32, b: i32) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.a == a && e.b == b)
            .map(|e| e.value)
    }

    pub fn upsert(&mut self, entry: Entry) -> Upsert {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.a == entry.a && e.b == entry.b)
        {
            existing.value = entry.value;
            return Upsert::Replaced;
        }

        let grew = self.len() == self.capacity();
        if grew {
            self.grow();
        }
        self.entries.push(entry);
        Upsert::Inserted { grew }
    }

    // Move the live prefix into a block twice as large.
    fn grow(&mut self) {
        let capacity = self.capacity * 2;
        let mut block = Vec::with_capacity(capacity);
        block.extend_from_slice(&self.entries);
        self.entries = block;
        self.capacity = capacity;
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(a: i32, b: i32, value: i32) -> Entry {
        Entry { a, b, value }
    }

    #[test]
    fn append_then_lookup() {
        let mut bucket = Bucket::with_capacity(2);
        assert_eq!(
            bucket.upsert(entry(1, 2, 10)),
            Upsert::Inserted { grew: false }
        );
        assert_eq!(
            bucket.upsert(entry(2, 1, 20)),
            Upsert::Inserted { grew: false }
        );
        assert_eq!(bucket.get(1, 2), Some(10));
        assert_eq!(bucket.get(2, 1), Some(20));
        assert_eq!(bucket.get(3, 0), None);
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn overwrite_keeps_position_and_length() {
        let mut bucket = Bucket::with_capacity(4);
        bucket.upsert(entry(1, 2, 10));
        bucket.upsert(entry(2, 1, 20));
        assert_eq!(bucket.upsert(entry(1, 2, 15)), Upsert::Replaced);
        assert_eq!(bucket.len(), 2);
        let order: Vec<_> = bucket.iter().map(|e| (e.a, e.b, e.value)).collect();
        assert_eq!(order, vec![(1, 2, 15), (2, 1, 20)]);
    }

    /// Growth happens only when an append would overflow, and doubles.
    #[test]
    fn grows_only_on_overflow() {
        let mut bucket = Bucket::with_capacity(3);
        for i in 0..3 {
            assert_eq!(
                bucket.upsert(entry(i, -i, i)),
                Upsert::Inserted { grew: false }
            );
        }
        assert_eq!(bucket.capacity(), 3);
        // Overwriting a full bucket never grows it.
        assert_eq!(bucket.upsert(entry(0, 0, 99)), Upsert::Replaced);
        assert_eq!(bucket.capacity(), 3);

        assert_eq!(bucket.upsert(entry(3, -3, 3)), Upsert::Inserted { grew: true });
        assert_eq!(bucket.capacity(), 6);
        assert_eq!(bucket.len(), 4);
        assert_eq!(bucket.get(0, 0), Some(99));
        for i in 1..4 {
            assert_eq!(bucket.get(i, -i), Some(i));
        }
    }

    #[test]
    fn into_entries_preserves_append_order() {
        let mut bucket = Bucket::with_capacity(1);
        for i in 0..5 {
            bucket.upsert(entry(i, 0, i * 10));
        }
        let values: Vec<_> = bucket.into_entries().into_iter().map(|e| e.value).collect();
        assert_eq!(values, vec![0, 10, 20, 30, 40]);
    }
}
