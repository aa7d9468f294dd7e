// tests/report_text.rs
//
// Text report sections and "none found" messages.

use bookwatch::config::options::ReportOptions;
use bookwatch::model::{Observation, ObservationSet, Price};
use bookwatch::report::Report;
use chrono::NaiveDate;

fn obs(day: u32, title: &str, units: i64) -> Observation {
    let ts = NaiveDate::from_ymd_opt(2024, 2, day).unwrap().and_hms_opt(8, 0, 0).unwrap();
    Observation::new(ts, title, Price::new(units, 0))
}

#[test]
fn populated_report_has_every_section() {
    let set: ObservationSet = vec![
        obs(1, "Dune", 10),
        obs(2, "Dune", 12),
        obs(2, "Emma", 45),
        obs(2, "Emma", 45),
    ]
    .into_iter()
    .collect();

    let report = Report::build(&set, &ReportOptions::default());
    let text = report.render_text();

    for heading in [
        "--- Price Statistics ---",
        "--- Latest 5 Logs ---",
        "--- Top 5 Cheapest Books ---",
        "--- Top 5 Most Expensive Books ---",
        "--- Books with Price Changes (since previous log) ---",
        "--- Biggest Price Drop ---",
        "--- Biggest Price Increase ---",
        "--- Daily Price Trends (min, max, mean) ---",
        "--- Price Anomaly Detection (prices outside 2 std dev) ---",
        "--- Duplicate Entry Detection ---",
        "--- Price Bands ---",
    ] {
        assert!(text.contains(heading), "missing {heading}\n{text}");
    }

    assert!(text.contains("Mean price: 28.00"), "{text}");
    assert!(text.contains("Unique titles: 2"));
    assert!(text.contains("Total entries: 4"));
    assert!(text.contains("+2.00"), "{text}");
    // a lone increase is both the biggest drop and the biggest increase
    assert!(!text.contains("No price drops detected."), "{text}");
    assert_eq!(report.biggest_drop, report.biggest_increase);
    assert!(!text.contains("No duplicate entries found."));
    assert!(text.contains("1 duplicate group(s)"));

    assert_eq!(report.changes.len(), 1);
    assert_eq!(report.duplicates.len(), 2);
    assert_eq!(report.deals.len(), 2);
}

#[test]
fn empty_set_reports_na_and_none() {
    let report = Report::build(&ObservationSet::new(), &ReportOptions::default());
    let text = report.render_text();

    assert!(text.contains("Mean price: n/a"));
    assert!(text.contains("Std deviation: n/a"));
    assert!(text.contains("Total entries: 0"));
    assert!(text.contains("No price changes detected."));
    assert!(text.contains("No price drops detected."));
    assert!(text.contains("No price increases detected."));
    assert!(text.contains("No price anomalies detected."));
    assert!(text.contains("No duplicate entries found."));
    assert!(!text.contains("NaN"));
}

#[test]
fn single_record_has_no_std_deviation() {
    let set: ObservationSet = vec![obs(1, "Dune", 10)].into_iter().collect();
    let text = Report::build(&set, &ReportOptions::default()).render_text();
    assert!(text.contains("Mean price: 10.00"));
    assert!(text.contains("Std deviation: n/a"));
}
