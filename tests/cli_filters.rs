// tests/cli_filters.rs
//
// Filter tokens are parsed into typed criteria at the command-line boundary.

use bookwatch::analysis::{filter, DateBound};
use bookwatch::cli::{parse_args, parse_filter_tokens, Command};
use bookwatch::error::CliError;
use bookwatch::model::{Observation, ObservationSet, Price};
use chrono::NaiveDate;

fn toks(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn all_five_keys() {
    let c = parse_filter_tokens(&toks(&[
        "title= The Road ",
        "pricemin=10",
        "pricemax=20.5",
        "datestart=2024-01-01",
        "dateend=2024-01-31 18:00:00",
    ]))
    .unwrap();

    assert_eq!(c.title.as_deref(), Some("The Road"));
    assert_eq!(c.price_min, Some(Price::new(10, 0)));
    assert_eq!(c.price_max, Some(Price::new(20, 50)));

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(18, 0, 0).unwrap();
    assert_eq!(c.date_start, Some(DateBound::At(start)));
    assert_eq!(c.date_end, Some(DateBound::At(end)));
}

#[test]
fn title_keeps_its_case_and_still_matches_any_case() {
    let c = parse_filter_tokens(&toks(&["title=DUNE"])).unwrap();
    assert_eq!(c.title.as_deref(), Some("DUNE"));

    let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
    let set: ObservationSet = vec![
        Observation::new(ts, "Dune Messiah", Price::new(9, 99)),
        Observation::new(ts, "Emma", Price::new(5, 0)),
    ]
    .into_iter()
    .collect();
    let out = filter(&set, &c);
    assert_eq!(out.len(), 1);
    assert_eq!(out.as_slice()[0].title, "Dune Messiah");
}

#[test]
fn no_tokens_is_no_constraint() {
    assert!(parse_filter_tokens(&[]).unwrap().is_empty());
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(
        parse_filter_tokens(&toks(&["pricemin=cheap"])).unwrap_err(),
        CliError::BadPrice { key: "pricemin", value: "cheap".into() }
    );
    assert_eq!(
        parse_filter_tokens(&toks(&["dateend=yesterday"])).unwrap_err(),
        CliError::BadDate { key: "dateend", value: "yesterday".into() }
    );
    assert_eq!(
        parse_filter_tokens(&toks(&["colour=red"])).unwrap_err(),
        CliError::UnknownArg("colour=red".into())
    );
    assert_eq!(
        parse_filter_tokens(&toks(&["pricemax"])).unwrap_err(),
        CliError::UnknownArg("pricemax".into())
    );
}

#[test]
fn report_subcommand_is_optional() {
    let with = parse_args(toks(&["report", "pricemax=15"])).unwrap();
    let without = parse_args(toks(&["pricemax=15"])).unwrap();
    assert_eq!(with, without);
    assert!(matches!(with.command, Command::Report { .. }));
}

#[test]
fn scrape_defaults_and_overrides() {
    let inv = parse_args(toks(&["scrape", "--log", "/tmp/p.csv"])).unwrap();
    assert_eq!(inv.command, Command::Scrape { url: None, pages: None });
    assert_eq!(inv.log.as_deref(), Some(std::path::Path::new("/tmp/p.csv")));

    let err = parse_args(toks(&["scrape", "https://x/", "2", "extra"])).unwrap_err();
    assert_eq!(err, CliError::UnknownArg("extra".into()));
}

#[test]
fn help_wins() {
    let inv = parse_args(toks(&["pricemin=oops", "--help"])).unwrap();
    assert_eq!(inv.command, Command::Help);
}
