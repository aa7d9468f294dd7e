// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    analysis::{self, DateBound, FilterCriteria},
    config::{consts::SETTINGS_FILE, file as settings, options::AppOptions},
    error::{AppError, CliError},
    logger::{self, LogTarget},
    model::{parse_timestamp, Price},
    progress::Progress,
    report::Report,
    scrape,
    store::{self, LogSnapshot},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Report { criteria: FilterCriteria },
    Scrape { url: Option<String>, pages: Option<u32> },
    Help,
}

/// Parsed command line: the command plus global path overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub log: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<(), AppError> {
    logger::init(LogTarget::Stderr);
    let inv = parse_args(env::args().skip(1))?;

    if inv.command == Command::Help {
        print!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let config_path = inv.config.clone().unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
    let mut opts: AppOptions = settings::load(&config_path)?;
    if let Some(log) = inv.log {
        opts.log_path = log;
    }

    match inv.command {
        Command::Report { criteria } => run_report(&opts, &criteria),
        Command::Scrape { url, pages } => {
            if let Some(u) = url { opts.scrape.url = u; }
            if let Some(n) = pages { opts.scrape.page_limit = n; }
            run_scrape(&opts)
        }
        Command::Help => Ok(()),
    }
}

fn run_report(opts: &AppOptions, criteria: &FilterCriteria) -> Result<(), AppError> {
    let loaded = match store::load(&opts.log_path)? {
        LogSnapshot::Loaded(loaded) => loaded,
        other => {
            println!("{}", other.describe());
            return Ok(());
        }
    };
    if loaded.skipped > 0 {
        logw!("Report: {} malformed row(s) skipped", loaded.skipped);
    }

    let set = analysis::filter(&loaded.observations, criteria);
    logd!("Report: {} of {} record(s) after filters", set.len(), loaded.observations.len());
    print!("{}", Report::build(&set, &opts.report).render_text());
    Ok(())
}

/// Prints alerts the way a terminal user expects to see them.
struct PrintProgress;

impl Progress for PrintProgress {
    fn alert(&mut self, title: &str, price: Price) {
        println!("{}", scrape::alert_line(title, price));
    }
}

fn run_scrape(opts: &AppOptions) -> Result<(), AppError> {
    let mut progress = PrintProgress;
    let summary = scrape::run(&opts.scrape, &opts.log_path, Some(&mut progress))?;

    if let Some(err) = &summary.error {
        println!("Error during scraping: {err}");
    }
    if summary.logged == 0 {
        println!("No data to log.");
    } else {
        println!(
            "Logged {} book(s) from {} page(s) to {}",
            summary.logged,
            summary.pages,
            opts.log_path.display()
        );
    }
    Ok(())
}

/// `[report] [filters..] | scrape [URL] [PAGES]`, with `--log PATH` and
/// `--config PATH` accepted anywhere.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut log = None;
    let mut config = None;
    let mut rest: Vec<String> = Vec::new();

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--log" => log = Some(PathBuf::from(it.next().ok_or(CliError::MissingValue("--log"))?)),
            "--config" => config = Some(PathBuf::from(it.next().ok_or(CliError::MissingValue("--config"))?)),
            "-h" | "--help" | "help" => {
                return Ok(Invocation { command: Command::Help, log, config });
            }
            _ => rest.push(a),
        }
    }

    let command = match rest.first().map(String::as_str) {
        Some("scrape") => parse_scrape(&rest[1..])?,
        Some("report") => Command::Report { criteria: parse_filter_tokens(&rest[1..])? },
        _ => Command::Report { criteria: parse_filter_tokens(&rest)? },
    };
    Ok(Invocation { command, log, config })
}

fn parse_scrape(args: &[String]) -> Result<Command, CliError> {
    match args {
        [] => Ok(Command::Scrape { url: None, pages: None }),
        [url] => Ok(Command::Scrape { url: Some(url.clone()), pages: None }),
        [url, pages] => {
            let n: u32 = pages.trim().parse().map_err(|_| CliError::BadPageCount(pages.clone()))?;
            if n == 0 {
                return Err(CliError::BadPageCount(pages.clone()));
            }
            Ok(Command::Scrape { url: Some(url.clone()), pages: Some(n) })
        }
        [_, _, extra, ..] => Err(CliError::UnknownArg(extra.clone())),
    }
}

/// `title=`, `pricemin=`, `pricemax=`, `datestart=`, `dateend=` tokens.
/// Dates compare as full timestamps; a bare date means midnight.
pub fn parse_filter_tokens(tokens: &[String]) -> Result<FilterCriteria, CliError> {
    let mut c = FilterCriteria::default();

    for tok in tokens {
        let Some((key, value)) = tok.split_once('=') else {
            return Err(CliError::UnknownArg(tok.clone()));
        };
        let value = value.trim();
        match key {
            "title" => c.title = Some(s!(value)),
            "pricemin" => c.price_min = Some(price("pricemin", value)?),
            "pricemax" => c.price_max = Some(price("pricemax", value)?),
            "datestart" => c.date_start = Some(date("datestart", value)?),
            "dateend" => c.date_end = Some(date("dateend", value)?),
            _ => return Err(CliError::UnknownArg(tok.clone())),
        }
    }
    Ok(c)
}

fn price(key: &'static str, value: &str) -> Result<Price, CliError> {
    Price::parse(value).ok_or_else(|| CliError::BadPrice { key, value: s!(value) })
}

fn date(key: &'static str, value: &str) -> Result<DateBound, CliError> {
    parse_timestamp(value)
        .map(DateBound::At)
        .ok_or_else(|| CliError::BadDate { key, value: s!(value) })
}
