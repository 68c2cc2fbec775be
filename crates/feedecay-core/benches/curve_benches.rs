//! Criterion benchmarks for the cost model and series generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feedecay_core::{collection_cost, generate_series, CurveParams};

fn bench_collection_cost(c: &mut Criterion) {
    c.bench_function("collection_cost", |b| {
        b.iter(|| collection_cost(black_box(25), 20_000.0, 100.0, 0.1))
    });
}

fn bench_generate_series(c: &mut Criterion) {
    let params = CurveParams::default();

    c.bench_function("generate_series", |b| {
        b.iter(|| generate_series(black_box(&params)))
    });
}

criterion_group!(benches, bench_collection_cost, bench_generate_series);
criterion_main!(benches);
