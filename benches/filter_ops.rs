//! Bloom filter operation benchmarks.
//!
//! # Scenarios
//!
//! 1. **add by size**: latency as the bit field grows past cache sizes
//! 2. **add by rate**: lower rates mean more hash rounds per call
//! 3. **contains hit/miss**: a miss can stop at the first unset bit
//! 4. **strategy**: SHA-512 vs XXH3 digest cost for one derivation
//! 5. **contention**: threads adding to one shared filter

use bloomgate::hash::{HashStrategy, Sha512DoubleHashing};
use bloomgate::BloomFilter;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::sync::Arc;
use std::thread;

mod common;
use common::*;

fn bench_add_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_by_size");

    for &size in SIZES {
        let items = generate_message_ids(size);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let filter = BloomFilter::new(size, 0.01).unwrap();
            let mut idx = 0;

            b.iter(|| {
                filter.add(black_box(&items[idx % items.len()])).unwrap();
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_add_by_fpr(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_by_fpr");
    let size = 100_000;
    let items = generate_strings(size, 32);

    for &fpr in FP_RATES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}", fpr)),
            &fpr,
            |b, &fpr| {
                let filter = BloomFilter::new(size, fpr).unwrap();
                let mut idx = 0;

                b.iter(|| {
                    filter.add(black_box(&items[idx % items.len()])).unwrap();
                    idx += 1;
                });
            },
        );
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let size = 100_000;
    let (present, absent) = create_disjoint_sets(size, size, 32);

    let filter = BloomFilter::new(size, 0.01).unwrap();
    filter.add_all(&present).unwrap();

    group.throughput(Throughput::Elements(1));
    group.bench_function("hit", |b| {
        let mut idx = 0;
        b.iter(|| {
            let hit = filter.contains(black_box(&present[idx % size])).unwrap();
            idx += 1;
            black_box(hit)
        });
    });
    group.bench_function("miss", |b| {
        let mut idx = 0;
        b.iter(|| {
            let hit = filter.contains(black_box(&absent[idx % size])).unwrap();
            idx += 1;
            black_box(hit)
        });
    });

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_hash");
    let items = generate_strings(1_000, 64);
    let (m, k) = (95_851, 7);

    let mut strategies: Vec<Arc<dyn HashStrategy>> = vec![Arc::new(Sha512DoubleHashing)];
    #[cfg(feature = "xxhash")]
    strategies.push(Arc::new(bloomgate::hash::Xxh3DoubleHashing));

    for strategy in strategies {
        group.throughput(Throughput::Elements(1));
        group.bench_function(strategy.name(), |b| {
            let mut idx = 0;
            b.iter(|| {
                let positions = strategy.hash(black_box(items[idx % items.len()].as_bytes()), m, k);
                idx += 1;
                black_box(positions)
            });
        });
    }

    group.finish();
}

fn bench_contended_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_add");
    let ops_per_thread = 10_000;

    for &threads in THREAD_COUNTS {
        group.throughput(Throughput::Elements((ops_per_thread * threads) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter_batched(
                    || Arc::new(BloomFilter::new(ops_per_thread * threads, 0.01).unwrap()),
                    |filter| {
                        let handles: Vec<_> = (0..threads)
                            .map(|t| {
                                let filter = Arc::clone(&filter);
                                thread::spawn(move || {
                                    for i in 0..ops_per_thread {
                                        filter.add(&format!("{}-{}", t, i)).unwrap();
                                    }
                                })
                            })
                            .collect();

                        for handle in handles {
                            handle.join().unwrap();
                        }

                        black_box(filter)
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_by_size,
    bench_add_by_fpr,
    bench_contains,
    bench_strategies,
    bench_contended_add,
);

criterion_main!(benches);
