//! Criterion micro-benchmarks for threshold pressure construction and queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seep_bench::{eqlnum_grid, thpres_deck, REGION_COUNT};
use seep_simconfig::ThresholdPressure;

/// Benchmark: build the table from a 64-record THPRES deck against a
/// 100K-cell EQLNUM grid (dominated by the max-region scan).
fn bench_construction_100k_cells(c: &mut Criterion) {
    let deck = thpres_deck(64);
    let grid = eqlnum_grid(100_000);

    c.bench_function("thpres_construct_100k_cells", |b| {
        b.iter(|| {
            let table = ThresholdPressure::from_deck(black_box(&deck), black_box(&grid)).unwrap();
            black_box(table);
        });
    });
}

/// Benchmark: query all region pairs of a constructed table.
fn bench_query_all_pairs(c: &mut Criterion) {
    let deck = thpres_deck(64);
    let grid = eqlnum_grid(10_000);
    let table = ThresholdPressure::from_deck(&deck, &grid).unwrap();

    c.bench_function("thpres_query_all_pairs", |b| {
        b.iter(|| {
            for r1 in 1..=REGION_COUNT {
                for r2 in 1..=REGION_COUNT {
                    black_box(table.has_region_barrier(r1, r2));
                    black_box(table.has_threshold_pressure(r1, r2));
                    let _ = black_box(table.threshold_pressure(r1, r2));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_construction_100k_cells,
    bench_query_all_pairs
);
criterion_main!(benches);
