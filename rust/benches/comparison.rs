use avltreemap::AvlTreeMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let keys = random_keys(size);

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = AvlTreeMap::with_capacity(keys.len());
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in SIZES {
        let keys = random_keys(size);
        let avl: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let std_map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(avl.get(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(std_map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in SIZES {
        let keys = random_keys(size);
        let avl: AvlTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let std_map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTreeMap", size), &keys, |b, keys| {
            b.iter_batched(
                || avl.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter_batched(
                || std_map.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_remove);
criterion_main!(benches);
