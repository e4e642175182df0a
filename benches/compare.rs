use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use pipe_algorithms::prelude::*;

fn sorted_input(len: usize, step: usize) -> Vec<usize> {
    (0..len).map(|n| n * step).collect()
}

fn merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare merge");
    for i in [10, 100, 1000].iter() {
        let a = sorted_input(*i, 2);
        let b = sorted_input(*i, 3);
        group.bench_with_input(BenchmarkId::new("pipe-algorithms", i), i, |bench, i| {
            bench.iter(|| {
                let output = a.iter().merge_sorted(&b).count();
                assert_eq!(output, *i * 2);
            })
        });
        group.bench_with_input(BenchmarkId::new("itertools", i), i, |bench, i| {
            bench.iter(|| {
                let output = itertools::merge(&a, &b).count();
                assert_eq!(output, *i * 2);
            })
        });
    }
    group.finish();
}

fn dedupe(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare dedupe");
    for i in [10, 100, 1000].iter() {
        let input: Vec<usize> = (0..*i).map(|n| n / 4).collect();
        group.bench_with_input(BenchmarkId::new("pipe-algorithms", i), i, |bench, _| {
            bench.iter(|| input.iter().dedupe().count())
        });
        group.bench_with_input(BenchmarkId::new("itertools", i), i, |bench, _| {
            bench.iter(|| input.iter().dedup().count())
        });
    }
    group.finish();
}

criterion_group!(benches, merge, dedupe);
criterion_main!(benches);
