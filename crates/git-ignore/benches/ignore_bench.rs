use criterion::{black_box, criterion_group, criterion_main, Criterion};
use git_ignore::{Engine, EngineOptions};

fn node_modules_style_rules() -> &'static str {
    "node_modules/\n\
     *.log\n\
     !important.log\n\
     target/\n\
     **/*.tmp\n\
     dist/**\n\
     /build\n\
     .env\n\
     *.swp\n\
     !src/**/*.swp\n"
}

fn bench_literal_match(c: &mut Criterion) {
    let mut engine = Engine::new(EngineOptions::default());
    engine.add(node_modules_style_rules()).unwrap();

    c.bench_function("ignore_literal_hit", |b| {
        b.iter(|| black_box(engine.ignores(black_box("debug.log"))))
    });
}

fn bench_deep_path(c: &mut Criterion) {
    let mut engine = Engine::new(EngineOptions::default());
    engine.add(node_modules_style_rules()).unwrap();

    c.bench_function("ignore_deep_path", |b| {
        b.iter(|| {
            black_box(engine.ignores(black_box(
                "src/components/widgets/deep/nested/module/file.tmp",
            )))
        })
    });
}

fn bench_globstar(c: &mut Criterion) {
    let mut engine = Engine::new(EngineOptions::default());
    engine.add(node_modules_style_rules()).unwrap();

    c.bench_function("ignore_globstar_tail", |b| {
        b.iter(|| black_box(engine.ignores(black_box("dist/assets/js/bundle.min.js"))))
    });
}

fn bench_large_ruleset(c: &mut Criterion) {
    let mut rules = String::new();
    for i in 0..500 {
        rules.push_str(&format!("generated_{i}.o\n"));
    }
    rules.push_str("!generated_250.o\n");

    let mut engine = Engine::new(EngineOptions::default());
    engine.add(&rules).unwrap();

    c.bench_function("ignore_large_ruleset", |b| {
        b.iter(|| black_box(engine.ignores(black_box("generated_499.o"))))
    });
}

criterion_group!(
    benches,
    bench_literal_match,
    bench_deep_path,
    bench_globstar,
    bench_large_ruleset
);
criterion_main!(benches);
