use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, bench_pipeline);

fn bench_pipeline(c: &mut Criterion) {
    let input = "(10+1)*234-(5+6*(7-8))+9*10*11+(12-13)";
    let tokens = rexpr::tokenize(input);
    let (expr, _) = rexpr::parse(&tokens, 0).unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("tokenize", |b| {
        b.iter(|| rexpr::tokenize(black_box(input)));
    });
    group.bench_function("parse", |b| {
        b.iter(|| rexpr::parse(black_box(&tokens), 0));
    });
    group.bench_function("value", |b| {
        b.iter(|| rexpr::value(black_box(&expr)));
    });
    group.bench_function("evaluate", |b| {
        b.iter(|| rexpr::evaluate(black_box(input)));
    });
    group.finish();
}
