// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the wizard's pure operations.
//!
//! Measures the performance of:
//! - Script generation for a growing number of concepts
//! - Library filtering and sorting
//! - A complete simulated render session

use chrono::Local;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use manim_studio::domain::catalog::{sample_catalog, CatalogQuery, LevelFilter, SortKey};
use manim_studio::domain::render::{RenderSession, RenderStatus};
use manim_studio::domain::requirements::{EducationLevel, RequirementsDraft};
use manim_studio::domain::script;
use std::hint::black_box;

fn draft_with_concepts(count: usize) -> RequirementsDraft {
    let mut draft = RequirementsDraft::default();
    draft.topic = "Linear Algebra: Eigenvectors".to_string();
    for index in 0..count {
        draft.add_concept(&format!("Concept number {index}"));
    }
    draft
}

fn bench_script_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_generation");

    for count in [1_usize, 8, 64] {
        let Ok(requirements) = draft_with_concepts(count).submit() else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &requirements, |b, req| {
            b.iter(|| black_box(script::generate(black_box(req))));
        });
    }

    group.finish();
}

fn bench_catalog_query(c: &mut Criterion) {
    let catalog = sample_catalog();
    let query = CatalogQuery {
        search: "a".to_string(),
        level: LevelFilter::Only(EducationLevel::HighSchool),
        sort: SortKey::Rating,
    };

    c.bench_function("catalog_query", |b| {
        b.iter(|| black_box(query.apply(black_box(&catalog))));
    });
}

fn bench_render_session(c: &mut Criterion) {
    c.bench_function("render_session_complete", |b| {
        b.iter(|| {
            let now = Local::now();
            let mut session = RenderSession::new("Fourier Series");
            session.start(now);
            while session.tick(now) != RenderStatus::Completed {}
            black_box(session.output().map(str::len));
        });
    });
}

criterion_group!(
    benches,
    bench_script_generation,
    bench_catalog_query,
    bench_render_session
);
criterion_main!(benches);
