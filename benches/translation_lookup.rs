// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use postula::config::Config;
use postula::i18n::{Catalog, I18n};
use std::hint::black_box;

fn translation_lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");

    let catalog = Catalog::embedded().unwrap();
    let i18n = I18n::from_catalog(&catalog, Some("es"), &Config::default()).unwrap();

    group.bench_function("translate_hit", |b| {
        b.iter(|| black_box(i18n.translate(black_box("es"), black_box("cv_experienceTitle"))));
    });

    group.bench_function("tr_fallback_to_key", |b| {
        b.iter(|| black_box(i18n.tr(black_box("noSuchKey"))));
    });

    group.bench_function("tr_with_plural_args", |b| {
        b.iter(|| black_box(i18n.tr_with_args("resumeCount", &[("count", black_box("3"))])));
    });

    group.bench_function("build_catalog", |b| {
        b.iter(|| black_box(Catalog::embedded().unwrap().bundles().unwrap().len()));
    });

    group.finish();
}

criterion_group!(benches, translation_lookup_benchmark);
criterion_main!(benches);
