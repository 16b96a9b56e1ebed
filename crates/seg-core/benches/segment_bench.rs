use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seg_core::{grapheme_cluster_breakables, line_breakables, sentence_breakables, word_breakables};

const SHORT: &str = "The quick brown fox jumps over the lazy dog.";
const LONG_REPEAT: usize = 200;

fn long_text() -> Vec<char> {
    SHORT.repeat(LONG_REPEAT).chars().collect()
}

fn bench_engines(c: &mut Criterion) {
    let short: Vec<char> = SHORT.chars().collect();
    let long = long_text();

    let mut group = c.benchmark_group("segmentation");
    for (label, text) in [("short", &short), ("long", &long)] {
        group.bench_with_input(BenchmarkId::new("grapheme_cluster", label), text, |b, t| {
            b.iter(|| grapheme_cluster_breakables(black_box(t), None));
        });
        group.bench_with_input(BenchmarkId::new("word", label), text, |b, t| {
            b.iter(|| word_breakables(black_box(t), None));
        });
        group.bench_with_input(BenchmarkId::new("sentence", label), text, |b, t| {
            b.iter(|| sentence_breakables(black_box(t), None));
        });
        group.bench_with_input(BenchmarkId::new("line", label), text, |b, t| {
            b.iter(|| line_breakables(black_box(t), false, None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
