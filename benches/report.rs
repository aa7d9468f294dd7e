// benches/report.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bookwatch::{
    analysis::{self, FilterCriteria},
    config::options::ReportOptions,
    model::{format_timestamp, ObservationSet, Price},
    report::Report,
    store,
};
use chrono::{Duration, NaiveDate};

// Synthetic log: 200 titles re-scraped hourly for ~2 weeks, prices drifting.
fn synthetic_log() -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let mut text = String::from("timestamp,title,price\n");
    for hour in 0..320i64 {
        let ts = format_timestamp(&(start + Duration::hours(hour)));
        for t in 0..200i64 {
            let minor = 1_000 + (t * 37 + hour / 24 * 11) % 5_000;
            let price = Price::from_minor(minor);
            text.push_str(&format!("{ts},\"Book {t}, vol. {}\",{price}\n", t % 7));
        }
    }
    text
}

fn bench_report(c: &mut Criterion) {
    let text = synthetic_log();
    let set: ObservationSet = store::parse_log(&text).into_observations().unwrap();
    let opts = ReportOptions::default();

    c.bench_function("parse_log", |b| {
        b.iter(|| black_box(store::parse_log(black_box(&text))))
    });

    c.bench_function("report_build", |b| {
        b.iter(|| black_box(Report::build(black_box(&set), &opts)))
    });

    c.bench_function("report_render", |b| {
        let report = Report::build(&set, &opts);
        b.iter(|| black_box(report.render_text().len()))
    });

    let criteria = FilterCriteria { title: Some("book 1".into()), ..Default::default() };
    c.bench_function("filter_title", |b| {
        b.iter(|| black_box(analysis::filter(black_box(&set), &criteria).len()))
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
