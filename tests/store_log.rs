// tests/store_log.rs
//
// Price log on disk: missing/empty states, header handling, appends.

use std::fs;

use bookwatch::model::{Observation, Price};
use bookwatch::store::{self, LogSnapshot};
use chrono::NaiveDate;

fn obs(title: &str, units: i64, hundredths: i64) -> Observation {
    let ts = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 30, 0).unwrap();
    Observation::new(ts, title, Price::new(units, hundredths))
}

#[test]
fn missing_and_empty_are_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_log.csv");

    let missing = store::load(&path).unwrap();
    assert_eq!(missing, LogSnapshot::Missing);
    assert_eq!(missing.describe(), "No price log found.");

    fs::write(&path, "timestamp,title,price\n").unwrap();
    let empty = store::load(&path).unwrap();
    assert_eq!(empty, LogSnapshot::Empty);
    assert_eq!(empty.describe(), "No data in price log.");
}

#[test]
fn append_creates_dirs_and_header_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("price_log.csv");

    assert_eq!(store::append(&path, &[obs("Dune", 12, 5)]).unwrap(), 1);
    assert_eq!(store::append(&path, &[obs("Emma", 7, 0), obs("Ulysses", 30, 99)]).unwrap(), 2);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("timestamp,title,price").count(), 1);
    assert!(text.ends_with('\n'));

    let LogSnapshot::Loaded(report) = store::load(&path).unwrap() else { panic!("expected data") };
    assert_eq!(report.skipped, 0);
    let titles: Vec<&str> = report.observations.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Emma", "Ulysses"]);
    assert_eq!(report.observations.as_slice()[0].price, Price::new(12, 5));
}

#[test]
fn append_repairs_missing_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_log.csv");
    fs::write(&path, "timestamp,title,price\n2024-05-01 09:00:00,Old,10.00").unwrap();

    store::append(&path, &[obs("New", 11, 0)]).unwrap();

    let LogSnapshot::Loaded(report) = store::load(&path).unwrap() else { panic!("expected data") };
    assert_eq!(report.observations.len(), 2);
    assert_eq!(report.skipped, 0);
}

#[test]
fn titles_with_commas_and_quotes_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_log.csv");
    let tricky = obs("Sapiens: A Brief History, of \"Humankind\"", 54, 23);

    store::append(&path, &[tricky.clone()]).unwrap();

    let snap = store::load(&path).unwrap();
    let set = snap.observations().unwrap();
    assert_eq!(set.as_slice(), &[tricky]);
}

#[test]
fn empty_append_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_log.csv");
    assert_eq!(store::append(&path, &[]).unwrap(), 0);
    assert!(!path.exists());
}

#[test]
fn writes_prices_with_two_decimals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("price_log.csv");
    store::append(&path, &[obs("Dune", 9, 50)]).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("2024-05-01 12:30:00,Dune,9.50\n"), "{text}");
}
