#![cfg(test)]

// Property tests for PairTable kept inside the crate so they can check the
// structural invariants of the slot array and buckets directly.

use crate::pair_table::PairTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// pairs, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    GetArbitrary(i32, i32),
    Clear,
    Iterate,
}

fn arb_pair() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        // Small keys: many distinct sums, realistic spread over slots.
        (-64i32..64, -64i32..64),
        // Fixed sum: everything lands in one bucket.
        (-64i32..64).prop_map(|a| (a, 7 - a)),
        // Full range, including wraparound in the hash.
        (any::<i32>(), any::<i32>()),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (Vec<(i32, i32)>, Vec<OpI>)> {
    proptest::collection::vec(arb_pair(), 1..=48).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            3 => idx.clone().prop_map(OpI::Get),
            1 => arb_pair().prop_map(|(a, b)| OpI::GetArbitrary(a, b)),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn small_table(capacity_shift: u32, load_factor: f64) -> PairTable {
    // Tiny starting sizes so short op sequences cross both growth policies.
    PairTable::builder()
        .initial_capacity(1 << capacity_shift)
        .bucket_capacity(1)
        .load_factor(load_factor)
        .build()
        .unwrap()
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` overwrites an existing pair and never duplicates it.
// - `get` returns exactly the model's value; misses are `None`.
// - `clear` empties the table and keeps its capacity.
// - `iter` yields each live entry exactly once.
// - After every op: capacity is a power of two, `len` stays within the load
//   factor, every entry sits in the slot its hash selects, and no bucket is
//   over capacity.
// Starting capacity and load factor are generated too: low load factors on
// small tables need several doublings from a single put.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        (pool, ops) in arb_scenario(),
        capacity_shift in 0u32..6,
        load_factor in 0.01f64..=1.0,
    ) {
        let mut sut = small_table(capacity_shift, load_factor);
        let mut model: HashMap<(i32, i32), i32> = HashMap::new();
        let mut last_capacity = sut.capacity();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let (a, b) = pool[i];
                    sut.put(a, b, v);
                    model.insert((a, b), v);
                }
                OpI::Get(i) => {
                    let (a, b) = pool[i];
                    prop_assert_eq!(sut.get(a, b), model.get(&(a, b)).copied());
                }
                OpI::GetArbitrary(a, b) => {
                    prop_assert_eq!(sut.get(a, b), model.get(&(a, b)).copied());
                    prop_assert_eq!(sut.contains(a, b), model.contains_key(&(a, b)));
                }
                OpI::Clear => {
                    let capacity = sut.capacity();
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), capacity);
                }
                OpI::Iterate => {
                    let seen: Vec<_> = sut.iter().collect();
                    let unique: BTreeSet<_> = seen.iter().copied().collect();
                    prop_assert_eq!(seen.len(), unique.len(), "iter yielded a pair twice");
                    let expected: BTreeSet<_> =
                        model.iter().map(|(&(a, b), &v)| (a, b, v)).collect();
                    prop_assert_eq!(unique, expected);
                }
            }

            // Capacity only ever grows, by powers of two.
            let capacity = sut.capacity();
            prop_assert!(capacity >= last_capacity);
            prop_assert!((capacity / last_capacity).is_power_of_two());
            prop_assert!(sut.len() as f64 <= capacity as f64 * load_factor);
            last_capacity = capacity;

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            sut.assert_invariants();
        }

        for (&(a, b), &v) in &model {
            prop_assert_eq!(sut.get(a, b), Some(v));
        }
    }
}

// Property: the growth counters agree with a replay of the growth policies.
// Only distinct pairs with one fixed sum are inserted, so there is exactly
// one bucket before any table resize and every growth is predictable.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_single_bucket_growth_count(n in 1usize..300, bucket_capacity in 1usize..8) {
        let mut sut = PairTable::builder()
            .initial_capacity(1024)
            .bucket_capacity(bucket_capacity)
            .build()
            .unwrap();
        for i in 0..n as i32 {
            sut.put(i, -i, i);
        }

        let mut capacity = bucket_capacity;
        let mut growths = 0u64;
        while capacity < n {
            capacity *= 2;
            growths += 1;
        }
        let stats = sut.stats();
        prop_assert_eq!(stats.buckets_allocated(), 1);
        prop_assert_eq!(stats.bucket_growths(), growths);
        prop_assert_eq!(stats.table_resizes(), 0);
        sut.assert_invariants();
    }
}
