//! Resolution throughput benchmarks.
//!
//! The resolver sits on the hot path of the per-download deduplication
//! check, so it should stay comfortably sub-millisecond per title.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use donghua_title::Resolver;

fn bench_resolve(c: &mut Criterion) {
    let resolver = Resolver::new();

    let mut group = c.benchmark_group("resolve");

    group.bench_function("canonical_marker", |b| {
        b.iter(|| {
            resolver
                .resolve(black_box("完美世界 第12集 1080P.mp4"), black_box("完美世界"))
                .unwrap()
        })
    });

    group.bench_function("chinese_numerals", |b| {
        b.iter(|| {
            resolver
                .resolve(black_box("凡人修仙传 第二季 第三十八集"), black_box("凡人修仙传"))
                .unwrap()
        })
    });

    group.bench_function("english_markers", |b| {
        b.iter(|| {
            resolver
                .resolve(black_box("Show S02E07.mkv"), black_box("Show"))
                .unwrap()
        })
    });

    group.bench_function("no_numbers_fallback", |b| {
        b.iter(|| {
            resolver
                .resolve(black_box("雾山五行 特别篇"), black_box("雾山五行"))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
