use chain_hashmap::ChainMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("chain_map_insert_10k", |b| {
        b.iter_batched(
            ChainMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("chain_map_get_hit", |b| {
        let mut m = ChainMap::new();
        let keys: Vec<String> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k.clone(), i as u64);
        }
        let mut cursor = 0;
        b.iter(|| {
            cursor = (cursor + 1) % keys.len();
            black_box(m.get(keys[cursor].as_str()))
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("chain_map_get_miss", |b| {
        let mut m = ChainMap::new();
        for (i, x) in lcg(7).take(20_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        // Disjoint stream: the hit stream uses seed 7.
        let misses: Vec<String> = lcg(0xbeef).take(1_000).map(|x| format!("m{x:016x}")).collect();
        let mut cursor = 0;
        b.iter(|| {
            cursor = (cursor + 1) % misses.len();
            black_box(m.get(misses[cursor].as_str()))
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("chain_map_iterate_20k", |b| {
        let mut m = ChainMap::new();
        for (i, x) in lcg(11).take(20_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        b.iter(|| {
            let mut acc = 0u64;
            for (_k, v) in m.iter() {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        })
    });
}

fn bench_remove_reinsert(c: &mut Criterion) {
    c.bench_function("chain_map_remove_reinsert", |b| {
        let mut m = ChainMap::new();
        let keys: Vec<String> = lcg(13).take(10_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k.clone(), i as u64);
        }
        let mut cursor = 0;
        b.iter(|| {
            cursor = (cursor + 1) % keys.len();
            let v = m.remove(keys[cursor].as_str()).unwrap();
            m.insert(keys[cursor].clone(), v);
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_get_hit,
    bench_get_miss,
    bench_iterate,
    bench_remove_reinsert
);
criterion_main!(benches);
