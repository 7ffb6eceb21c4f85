//! Criterion benchmark: fixture generation throughput at two batch sizes.
//!
//! The insert strategies need a live server; the generator is the only part
//! worth benchmarking offline.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mysql_insert_bench::fixture;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixture/generate");

    for count in [1_000usize, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| fixture::generate(count, 0xFEED_FACE_CAFE_BEEF));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
