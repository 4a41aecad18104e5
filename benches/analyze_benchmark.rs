//! Benchmarks for classification and architecture analysis.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use stride_tools::{CategoryClassifier, StrideEngine};

const NAMES: &[&str] = &[
    "EC2",
    "Amazon S3 Bucket",
    "API Gateway Endpoint",
    "Lambda Layer",
    "UnknownWidget123",
    "Cloud Storage Bucket",
    "Cognito",
    "WAF",
];

fn bench_classify(c: &mut Criterion) {
    let classifier = CategoryClassifier::new();
    let mut group = c.benchmark_group("classify");
    for name in NAMES {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| classifier.classify(black_box(name)));
        });
    }
    group.finish();
}

fn bench_analyze_architecture(c: &mut Criterion) {
    let engine = StrideEngine::new();
    let mut group = c.benchmark_group("analyze_architecture");
    for size in [4usize, 64, 1024] {
        let names: Vec<&str> = NAMES.iter().copied().cycle().take(size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| engine.analyze_architecture(black_box(names)));
        });
    }
    group.finish();
}

fn bench_report_json(c: &mut Criterion) {
    let engine = StrideEngine::new();
    let names: Vec<&str> = NAMES.iter().copied().cycle().take(256).collect();
    let report = engine.analyze_architecture(&names);
    c.bench_function("report_to_json_256", |b| {
        b.iter(|| serde_json::to_string(black_box(&report)));
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_analyze_architecture,
    bench_report_json
);
criterion_main!(benches);
