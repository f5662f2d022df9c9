use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;
use veb_tree::VebTree;

/// Universe exponents to benchmark against.
const UNIVERSE_BITS: [u8; 3] = [12, 16, 20];

/// Reproducible pseudo-random keys inside `[0, 2^bits)`.
fn keys(bits: u8, count: usize) -> Vec<u32> {
    let mask = (1u64 << bits) - 1;
    (0..count as u64)
        .map(|i| {
            // Simple LCG for reproducible "random" keys
            let a = 6364136223846793005u64;
            let c = 1442695040888963407u64;
            ((a.wrapping_mul(i).wrapping_add(c) >> 17) & mask) as u32
        })
        .collect()
}

fn filled(bits: u8, keys: &[u32]) -> (VebTree, BTreeSet<u32>) {
    let mut tree = VebTree::new(1 << bits).unwrap();
    let mut btree = BTreeSet::new();
    for &k in keys {
        tree.insert(k).unwrap();
        btree.insert(k);
    }
    (tree, btree)
}

/// Benchmark inserting a batch of random keys into a cleared tree
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");

    for bits in UNIVERSE_BITS {
        let keys = keys(bits, 10_000);
        let mut tree = VebTree::new(1 << bits).unwrap();

        group.bench_with_input(BenchmarkId::new("VebTree", bits), &keys, |b, keys| {
            b.iter(|| {
                tree.clear();
                for &k in keys {
                    black_box(tree.insert(k).unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", bits), &keys, |b, keys| {
            b.iter(|| {
                let mut btree = BTreeSet::new();
                for &k in keys {
                    black_box(btree.insert(k));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark membership lookups (half hits, half misses)
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for bits in UNIVERSE_BITS {
        let stored = keys(bits, 10_000);
        let probes = keys(bits, 20_000);
        let (tree, btree) = filled(bits, &stored);

        group.bench_with_input(BenchmarkId::new("VebTree", bits), &probes, |b, probes| {
            b.iter(|| {
                for &k in probes {
                    black_box(tree.contains(k));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", bits), &probes, |b, probes| {
            b.iter(|| {
                for &k in probes {
                    black_box(btree.contains(&k));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark successor and predecessor queries
fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for bits in UNIVERSE_BITS {
        let stored = keys(bits, 10_000);
        let probes = keys(bits, 20_000);
        let (tree, btree) = filled(bits, &stored);

        group.bench_with_input(
            BenchmarkId::new("VebTree_successor", bits),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &k in probes {
                        black_box(tree.successor(k));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VebTree_predecessor", bits),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &k in probes {
                        black_box(tree.predecessor(k));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet_successor", bits),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &k in probes {
                        black_box(btree.range(k + 1..).next());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet_predecessor", bits),
            &probes,
            |b, probes| {
                b.iter(|| {
                    for &k in probes {
                        black_box(btree.range(..k).next_back());
                    }
                });
            },
        );
    }

    group.finish();
}

/// Benchmark single remove followed by re-insert
fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_reinsert");

    for bits in UNIVERSE_BITS {
        let stored = keys(bits, 10_000);
        let (mut tree, mut btree) = filled(bits, &stored);
        let victim = stored[stored.len() / 2];

        group.bench_function(BenchmarkId::new("VebTree", bits), |b| {
            b.iter(|| {
                black_box(tree.remove(victim).unwrap());
                tree.insert(victim).unwrap();
            });
        });

        group.bench_function(BenchmarkId::new("BTreeSet", bits), |b| {
            b.iter(|| {
                black_box(btree.remove(&victim));
                btree.insert(victim);
            });
        });
    }

    group.finish();
}

/// Benchmark construction cost (eager Θ(U) allocation)
fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for bits in UNIVERSE_BITS {
        group.bench_with_input(BenchmarkId::new("VebTree", bits), &bits, |b, &bits| {
            b.iter(|| black_box(VebTree::new(1 << bits).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_neighbors,
    bench_remove,
    bench_construct
);
criterion_main!(benches);
