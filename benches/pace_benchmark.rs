use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use track_my_run::db::{InMemoryRunStore, RunStore};
use track_my_run::models::{Duration, RunRecord};
use track_my_run::routes::runs::render_runs_page;

fn sample_runs(count: usize) -> Vec<RunRecord> {
    let date = NaiveDate::from_ymd_opt(2013, 2, 3).expect("valid date");
    (0..count)
        .map(|i| {
            RunRecord::new(
                date,
                (i % 42) as f64 + 0.42,
                Duration::new((i % 4) as i64, (i % 60) as i64, (i % 60) as i64),
            )
        })
        .collect()
}

fn benchmark_pace(c: &mut Criterion) {
    let run = RunRecord::new(
        NaiveDate::from_ymd_opt(2013, 2, 3).expect("valid date"),
        5.42,
        Duration::new(0, 34, 52),
    );

    c.bench_function("pace_single_run", |b| b.iter(|| black_box(&run).pace()));
}

fn benchmark_listing(c: &mut Criterion) {
    let store = InMemoryRunStore::new();
    for run in sample_runs(1_000) {
        store.record(run).expect("in-memory store never fails");
    }

    let mut group = c.benchmark_group("listing_1000_runs");

    group.bench_function("all_runs", |b| b.iter(|| black_box(&store).all_runs()));

    let runs = store.all_runs().expect("in-memory store never fails");
    group.bench_function("render_html", |b| {
        b.iter(|| render_runs_page("My Latest Runs", black_box(&runs)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_pace, benchmark_listing);
criterion_main!(benches);
