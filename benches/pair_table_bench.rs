use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pair_table::PairTable;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn pair(n: u64) -> (i32, i32) {
    // Keep keys small so sums spread over many slots, as state indices do.
    (((n >> 40) & 0xffff) as i32, ((n >> 16) & 0xffff) as i32)
}

fn bench_put(c: &mut Criterion) {
    c.bench_function("pair_table_put_10k", |b| {
        let pairs: Vec<_> = lcg(1).take(10_000).map(pair).collect();
        b.iter_batched(
            PairTable::new,
            |mut t| {
                for (i, &(x, y)) in pairs.iter().enumerate() {
                    t.put(x, y, i as i32);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_colliding(c: &mut Criterion) {
    c.bench_function("pair_table_put_1k_same_slot", |b| {
        b.iter_batched(
            PairTable::new,
            |mut t| {
                for i in 0..1_000 {
                    t.put(i, 500 - i, i);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("pair_table_get_hit", |b| {
        let pairs: Vec<_> = lcg(7).take(20_000).map(pair).collect();
        let mut t = PairTable::new();
        for (i, &(x, y)) in pairs.iter().enumerate() {
            t.put(x, y, i as i32);
        }
        let mut it = pairs.iter().cycle();
        b.iter(|| {
            let &(x, y) = it.next().unwrap();
            black_box(t.get(x, y));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("pair_table_get_miss", |b| {
        let mut t = PairTable::new();
        for (i, (x, y)) in lcg(11).take(10_000).map(pair).enumerate() {
            t.put(x, y, i as i32);
        }
        let mut miss = lcg(0xdead_beef).map(pair).map(|(x, y)| (x + 0x10000, y));
        b.iter(|| {
            let (x, y) = miss.next().unwrap();
            black_box(t.get(x, y));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put, bench_put_colliding, bench_get_hit, bench_get_miss
}
criterion_main!(benches);
