// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering and the card entrance replay.
//!
//! Measures the performance of:
//! - Switching categories on a large gallery
//! - A full page filter change, including the reveal scheduling

use criterion::{criterion_group, criterion_main, Criterion};
use folio_fx::app::persisted_state::MemoryStorage;
use folio_fx::app::{Content, Message, Mount, Page};
use folio_fx::config::Config;
use folio_fx::geometry::Viewport;
use folio_fx::ui::gallery::{CategoryFilter, Gallery, Project};
use folio_fx::ui::reveal::ObservationSupport;
use std::hint::black_box;
use std::time::Instant;

const CATEGORIES: [&str; 4] = ["web", "uiux", "mobile", "multimedia"];

fn projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|index| Project {
            id: index.to_string(),
            category: Some(CATEGORIES[index % CATEGORIES.len()].to_string()),
            ..Project::default()
        })
        .collect()
}

fn bench_set_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");
    let mut gallery = Gallery::new(projects(1_000));
    let filters: Vec<CategoryFilter> = CATEGORIES
        .iter()
        .map(|id| CategoryFilter::from_id(id))
        .chain([CategoryFilter::All])
        .collect();

    group.bench_function("cycle_categories", |b| {
        b.iter(|| {
            for filter in &filters {
                black_box(gallery.set_filter(filter.clone()));
            }
        });
    });

    group.finish();
}

/// Filter change through the page shell, which also replays card entrances.
fn bench_page_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_filter");
    let now = Instant::now();
    let mut page = Page::mount(
        Mount {
            config: Config::default(),
            storage: Box::new(MemoryStorage::new()),
            content: Content {
                projects: projects(200),
                testimonials: Vec::new(),
            },
            viewport: Viewport::new(1280.0, 800.0),
            observation: ObservationSupport::Available,
        },
        now,
    );

    group.bench_function("page_filter_change", |b| {
        b.iter(|| {
            black_box(page.update(Message::SetFilter(CategoryFilter::from_id("web")), now));
            black_box(page.update(Message::SetFilter(CategoryFilter::All), now));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set_filter, bench_page_filter);
criterion_main!(benches);
