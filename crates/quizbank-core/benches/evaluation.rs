use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizbank_core::evaluate::{is_correct, resolve_analysis};
use quizbank_core::format::format_content;
use quizbank_core::model::Answer;
use serde_json::{json, Value};

fn bench_is_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_correct");

    let multiple = Answer::Multiple((0..16).map(Value::from).collect());
    let submitted = json!((0..16).rev().collect::<Vec<i64>>());
    group.bench_function("multiple_16", |b| {
        b.iter(|| is_correct(black_box(&multiple), black_box(&submitted)))
    });

    let essay = Answer::Essay("  The quick brown fox jumps over the lazy dog ".repeat(20));
    let submitted = json!("the quick brown fox jumps over the lazy dog ".repeat(20));
    group.bench_function("essay_long", |b| {
        b.iter(|| is_correct(black_box(&essay), black_box(&submitted)))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_content");

    let content = "Fill {{ANS}} in. ".repeat(50);
    let answer = Answer::Fill((0..50).map(|i| Value::from(i.to_string())).collect());
    group.bench_function("fill_50_tokens", |b| {
        b.iter(|| format_content(black_box(&content), black_box(&answer)))
    });

    let legacy = "Fill ____ in. ".repeat(50);
    group.bench_function("fill_50_legacy", |b| {
        b.iter(|| format_content(black_box(&legacy), black_box(&answer)))
    });

    group.finish();
}

fn bench_resolve_analysis(c: &mut Criterion) {
    let options: Vec<String> = (0..4).map(|i| format!("option text {i}")).collect();
    let analysis = "Compare {{OPT:1}} with {{OPT:3}}; {{OPT:9}} is not an option. ".repeat(10);

    c.bench_function("resolve_analysis", |b| {
        b.iter(|| resolve_analysis(black_box(&analysis), black_box(Some(options.as_slice()))))
    });
}

criterion_group!(
    benches,
    bench_is_correct,
    bench_format,
    bench_resolve_analysis
);
criterion_main!(benches);
