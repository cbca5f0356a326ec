// Criterion benchmarks for StudySync Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeSet;
use studysync_match::core::{filter_records, Selections};
use studysync_match::models::{Buddy, FacetCategory};
use studysync_match::services::Catalog;

const SUBJECTS: [&str; 6] = ["Python", "React", "Java", "TypeScript", "Data Science", "Web Development"];
const INTERESTS: [&str; 5] = ["Hackathons", "Open Source", "Research", "System Design", "Accessibility"];

fn create_buddy(id: u32) -> Buddy {
    let i = id as usize;
    Buddy {
        id,
        name: format!("Student {}", id),
        subjects: vec![
            SUBJECTS[i % SUBJECTS.len()].to_string(),
            SUBJECTS[(i / 7) % SUBJECTS.len()].to_string(),
        ],
        interests: vec![INTERESTS[i % INTERESTS.len()].to_string()],
        study_style: "Collaborative".to_string(),
        availability: "Flexible".to_string(),
        image: None,
    }
}

fn selections() -> Selections {
    Selections::from([
        (
            FacetCategory::Subjects,
            BTreeSet::from(["Python".to_string(), "Java".to_string()]),
        ),
        (
            FacetCategory::Interests,
            BTreeSet::from(["Research".to_string()]),
        ),
    ])
}

fn bench_seed_catalog(c: &mut Criterion) {
    let catalog = Catalog::seed();
    let selections = selections();

    c.bench_function("seed_buddies_query_and_selection", |b| {
        b.iter(|| {
            filter_records(
                black_box(&catalog.buddies.records),
                black_box("data"),
                black_box(&selections),
            )
        })
    });
}

fn bench_filter_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("faceted_filter");
    let selections = selections();

    for count in [100u32, 1_000, 10_000] {
        let buddies: Vec<Buddy> = (0..count).map(create_buddy).collect();

        group.bench_with_input(BenchmarkId::new("query", count), &buddies, |b, buddies| {
            b.iter(|| filter_records(black_box(buddies), black_box("script"), &Selections::new()))
        });

        group.bench_with_input(BenchmarkId::new("selection", count), &buddies, |b, buddies| {
            b.iter(|| filter_records(black_box(buddies), "", black_box(&selections)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_seed_catalog, bench_filter_scaling);
criterion_main!(benches);
