use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use launch_dash::io::DatasetLoader;
use launch_dash::models::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelector};
use launch_dash::services::{aggregate_outcomes, build_catalog, filter_by_payload};

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

fn synthetic_dataset(size: usize) -> LaunchDataset {
    let records = (0..size)
        .map(|i| {
            LaunchRecord::new(SITES[i % SITES.len()], (i * 37 % 16_000) as f64, i % 3 != 0)
                .with_booster_category(if i % 2 == 0 { "FT" } else { "B4" })
        })
        .collect();
    LaunchDataset::from_records(records)
}

fn bench_outcomes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_outcomes");

    for size in [100, 10_000] {
        let dataset = synthetic_dataset(size);
        group.bench_with_input(BenchmarkId::new("all_sites", size), &dataset, |b, d| {
            b.iter(|| aggregate_outcomes(black_box(d), &SiteSelector::All));
        });

        let selector = SiteSelector::parse("KSC LC-39A");
        group.bench_with_input(BenchmarkId::new("single_site", size), &dataset, |b, d| {
            b.iter(|| aggregate_outcomes(black_box(d), &selector));
        });
    }

    group.finish();
}

fn bench_payload_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_payload");

    let range = PayloadRange::new(2_000.0, 8_000.0).expect("valid range");
    for size in [100, 10_000] {
        let dataset = synthetic_dataset(size);
        group.bench_with_input(BenchmarkId::new("all_sites", size), &dataset, |b, d| {
            b.iter(|| filter_by_payload(black_box(d), &SiteSelector::All, &range));
        });
    }

    group.finish();
}

fn bench_catalog_and_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("startup");

    let dataset = synthetic_dataset(10_000);
    group.bench_function("build_catalog_10000", |b| {
        b.iter(|| build_catalog(black_box(&dataset)));
    });

    let csv: String = std::iter::once("Launch Site,Payload Mass (kg),class\n".to_string())
        .chain((0..1_000).map(|i| format!("{},{},{}\n", SITES[i % 4], i * 9, i % 2)))
        .collect();
    group.bench_function("load_csv_1000_rows", |b| {
        b.iter(|| DatasetLoader::load_from_csv_str(black_box(&csv)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_outcomes,
    bench_payload_filter,
    bench_catalog_and_load
);
criterion_main!(benches);
