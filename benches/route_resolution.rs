use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use eduletter::core::navigation::{derive_view_from_path, entity_id_from_path};

const PATHS: [&str; 8] = [
    "/",
    "/library",
    "/profile",
    "/reader/42",
    "/audio/7/chapter/2",
    "/reader/",
    "/unknown/xyz",
    "/readerx/1",
];

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_resolution");
    group.bench_function("derive_view_from_path", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(derive_view_from_path(black_box(path)));
            }
        })
    });
    group.bench_function("entity_id_from_path", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(entity_id_from_path(black_box(path)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
