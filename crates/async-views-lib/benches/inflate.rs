//! Benchmarks for batch inflation
//!
//! Run with: cargo bench --package async-views-lib

use async_views_lib::{CellSpec, LayoutParams, RowTemplate, build_row, inflate_batch};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_build_row(c: &mut Criterion) {
    let template = RowTemplate::default();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("build_row", |b| {
        b.iter(|| build_row(black_box(&template), black_box(1234), &mut rng))
    });
}

fn bench_inflate_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflate_batch");

    for rows in [1_000usize, 10_000] {
        for cells in [3usize, 8] {
            let template = RowTemplate::new(vec![CellSpec::new(1.0); cells], 0)
                .expect("benchmark template is valid");
            let mut rng = StdRng::seed_from_u64(0);

            group.throughput(Throughput::Elements(rows as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{cells}_cells"), rows),
                &rows,
                |b, &rows| {
                    b.iter(|| {
                        inflate_batch(rows, LayoutParams::default(), &template, &mut rng)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build_row, bench_inflate_batch);
criterion_main!(benches);
