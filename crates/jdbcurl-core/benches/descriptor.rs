//! Benchmarks for the Oracle connect-descriptor scan on growing nesting depth.
//!
//! Cost per byte should stay constant as depth grows. A superlinear curve here
//! means the scan started re-reading groups it already passed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use jdbcurl_core::dialect::descriptor::scan;
use jdbcurl_core::parse;
use jdbcurl_testutil::{nested_descriptor, unbalanced_descriptor};

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor/nested");

    for depth in [10, 100, 1_000, 10_000] {
        let url = nested_descriptor(depth);
        group.throughput(Throughput::Bytes(url.len() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &url, |b, url| {
            b.iter(|| parse(black_box(url)).unwrap());
        });
    }
    group.finish();
}

fn bench_unbalanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptor/unbalanced");

    for depth in [10, 100, 1_000, 10_000] {
        let url = unbalanced_descriptor(depth);
        // Skip the `jdbc:oracle:thin:@` prefix and scan the raw descriptor text.
        let text = url.split_once('@').map_or("", |(_, rest)| rest).to_string();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("depth", depth), &text, |b, text| {
            b.iter(|| scan(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nested, bench_unbalanced);
criterion_main!(benches);
