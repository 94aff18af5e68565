use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formtree::from_pairs;

fn flat_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("field{}", i), format!("value{}", i)))
        .collect()
}

fn nested_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            (
                format!("items[{}].attrs.name", i),
                format!("value{}", i),
            )
        })
        .collect()
}

fn auto_index_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| ("env[].key".to_string(), format!("VAR{}", i)))
        .collect()
}

fn benchmark_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_pairs_flat");

    for size in [10, 100, 1000].iter() {
        let pairs = flat_pairs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| from_pairs(black_box(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))))
        });
    }

    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_pairs_nested");

    for size in [10, 100, 1000].iter() {
        let pairs = nested_pairs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| from_pairs(black_box(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))))
        });
    }

    group.finish();
}

fn benchmark_auto_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_pairs_auto_index");

    for size in [10, 100, 1000].iter() {
        let pairs = auto_index_pairs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| from_pairs(black_box(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))))
        });
    }

    group.finish();
}

fn benchmark_deep_path(c: &mut Criterion) {
    let path = "a.b.c.d.e.f.g.h";

    c.bench_function("from_pairs_deep_path", |b| {
        b.iter(|| from_pairs(black_box([(path, "leaf")])))
    });
}

criterion_group!(
    benches,
    benchmark_flat,
    benchmark_nested,
    benchmark_auto_index,
    benchmark_deep_path
);
criterion_main!(benches);
