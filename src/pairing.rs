//! Pairing hash used to place `(a, b)` keys into slots.
//!
//! The hash is the Cantor pairing polynomial of the sum `s = a + b`:
//! `((s * (s + 1)) >>> 1) + 1`. All arithmetic wraps at 32 bits and the
//! shift is logical, so the bit pattern of the product is shifted rather
//! than its signed value. Placement is bit-exact with tables built by
//! earlier implementations of the same scheme.
//!
//! The result depends only on `a + b`: every pair with the same sum lands
//! in the same slot. Buckets absorb those collisions with a linear scan.

/// Hash an ordered pair of integers.
#[inline]
pub fn pair_hash(a: i32, b: i32) -> u32 {
    let s = a.wrapping_add(b);
    let product = s.wrapping_mul(s.wrapping_add(1)) as u32;
    (product >> 1).wrapping_add(1)
}

/// Map a hash to a slot of a power-of-two sized array given its mask.
#[inline]
pub(crate) fn slot_index(hash: u32, mask: usize) -> usize {
    hash as usize & mask
}
