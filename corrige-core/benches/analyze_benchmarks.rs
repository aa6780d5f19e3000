//! Benchmarks for Analyzer::analyze
//!
//! Run with: cargo bench --bench analyze_benchmarks

use corrige_core::{Analyzer, AnalyzerConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const ESSAY: &str = include_str!("../tests/fixtures/clean_essay.txt");
const INFORMAL: &str = "Hoje nao vou la pq tah chovendo mt. vc sabe q os alunos precisa de ajuda kkkk. \
                        Nos dias de hoje, fazer algo é urgente, sendo assim a educacao importa.\n\n";

/// Repeat `base` until the text reaches at least `size` bytes
fn generate_text(base: &str, size: usize) -> String {
    base.repeat(size / base.len() + 1)
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let analyzer = Analyzer::new();

    for size in [1_000, 5_000, 10_000] {
        let text = generate_text(ESSAY, size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("clean", size), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)));
        });

        let text = generate_text(INFORMAL, size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("informal", size), &text, |b, text| {
            b.iter(|| analyzer.analyze(black_box(text)));
        });
    }

    group.finish();
}

fn bench_parallel_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_evaluation");
    let text = generate_text(ESSAY, 10_000);

    for parallel in [false, true] {
        let config = AnalyzerConfig::builder()
            .parallel(parallel)
            .build()
            .unwrap();
        let analyzer = Analyzer::builder().config(config).build().unwrap();
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| b.iter(|| analyzer.analyze(black_box(&text))));
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_parallel_rules);
criterion_main!(benches);
