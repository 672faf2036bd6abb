use criterion::{black_box, criterion_group, criterion_main, Criterion};
use teabreak_notes::highlight::{tokenize, Registry};

const RUST_SAMPLE: &str = include_str!("../src/highlight/syntax.rs");

fn bench_tokenize(c: &mut Criterion) {
    let registry = Registry::load();
    let rust = registry.find("rust").unwrap();

    c.bench_function("tokenize_rust_module", |b| {
        b.iter(|| tokenize(rust, black_box(RUST_SAMPLE)))
    });

    let python = registry.find("python").unwrap();
    let sample = "def parse(path):\n    with open(path) as f:  # read\n        return [l for l in f]\n";
    c.bench_function("tokenize_python_snippet", |b| {
        b.iter(|| tokenize(python, black_box(sample)))
    });
}

fn bench_registry_load(c: &mut Criterion) {
    c.bench_function("registry_load", |b| b.iter(Registry::load));
}

criterion_group!(benches, bench_tokenize, bench_registry_load);
criterion_main!(benches);
