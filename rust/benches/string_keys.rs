use btree_index::BTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEED: u64 = 42;
const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const DEGREES: [usize; 3] = [2, 8, 64];

fn generate_keys(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(6..14);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn build_tree(degree: usize, keys: &[String]) -> BTree {
    let mut tree = BTree::new(degree).unwrap();
    for key in keys {
        tree.insert(key.as_str());
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &size in &SIZES {
        let keys = generate_keys(size);
        for &degree in &DEGREES {
            group.bench_with_input(
                BenchmarkId::new(format!("btree_t{}", degree), size),
                &keys,
                |b, keys| b.iter(|| black_box(build_tree(degree, keys))),
            );
        }
        group.bench_with_input(BenchmarkId::new("std_btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for key in keys {
                    set.insert(key.clone());
                }
                black_box(set)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &size in &SIZES {
        let keys = generate_keys(size);
        let probes: Vec<&str> = keys.iter().step_by(7).map(String::as_str).collect();
        for &degree in &DEGREES {
            let tree = build_tree(degree, &keys);
            group.bench_with_input(
                BenchmarkId::new(format!("btree_t{}", degree), size),
                &probes,
                |b, probes| b.iter(|| black_box(tree.count_present(probes.iter().copied()))),
            );
        }
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.sample_size(20);
    for &size in &SIZES[..2] {
        let keys = generate_keys(size);
        for &degree in &DEGREES {
            group.bench_with_input(
                BenchmarkId::new(format!("btree_t{}", degree), size),
                &keys,
                |b, keys| {
                    b.iter_batched(
                        || build_tree(degree, keys),
                        |mut tree| {
                            for key in keys.iter().step_by(2) {
                                tree.delete(key);
                            }
                            black_box(tree)
                        },
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
