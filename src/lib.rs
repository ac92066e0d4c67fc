//! pair-table: an in-memory table from ordered `(i32, i32)` pairs to `i32`
//! values, built on open hashing with chained, growable buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: amortized O(1) `put`/`get` for integer pair keys with a slot
//!   placement that matches existing tables using the same pairing hash.
//! - Layers:
//!   - `pairing`: the Cantor-style pairing hash `((s * (s + 1)) >>> 1) + 1`
//!     over `s = a + b`, with 32-bit wrapping arithmetic.
//!   - `Bucket`: the entries behind one slot, scanned linearly, with an
//!     explicit capacity that doubles only when an append overflows it.
//!   - `PairTable`: a power-of-two slot array of `Option<Bucket>` plus the
//!     table-level growth policy and the public API.
//!
//! Constraints
//! - Pairs are unique; `put` on an existing pair overwrites in place.
//! - Slots hold no bucket until the first entry lands there.
//! - After every `put`, `len <= capacity * load_factor`; exceeding it
//!   doubles the slot array and re-places every entry.
//! - No removal of single entries. `clear` drops all entries and keeps the
//!   grown capacity.
//!
//! Missing pairs
//! - `get` returns `Option<i32>`, so every `i32` is a storable value.
//! - `get_or_absent` returns the sentinel [`ABSENT`] (`-1`) for missing
//!   pairs; a stored `-1` is indistinguishable from a miss there.
//!
//! Hash wraparound
//! - `a + b` and the product wrap at 32 bits and the shift is logical. This
//!   is kept bit-exact; sums near the ends of the `i32` range collide with
//!   small sums, which buckets absorb like any other collision.
//!
//! Diagnostics
//! - Each table owns its [`TableStats`] counters (table resizes, bucket
//!   allocations, bucket growths). There is no process-wide state.
//! - With the `logging` feature, table resizes are logged at `debug` and
//!   bucket growths at `trace` through the `log` crate.
//!
//! Notes and non-goals
//! - Single-threaded by construction: no internal locking. Callers that
//!   share a table supply their own mutual exclusion.
//! - No serialization and no key/value domains beyond `i32`.

mod bucket;
mod builder;
mod error;
mod pair_table;
mod pair_table_proptest;
pub mod pairing;
mod stats;

// Public surface
pub use builder::PairTableBuilder;
pub use error::ConfigError;
pub use pair_table::{Iter, PairTable, ABSENT};
pub use stats::TableStats;
