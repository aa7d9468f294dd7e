// src/scrape.rs
use std::{path::Path, thread, time::Duration};

use chrono::{SubsecRound, Utc};

use crate::{
    config::{consts::REQUEST_PAUSE_MS, options::ScrapeOptions},
    core::net,
    error::{ScrapeError, StoreError},
    model::{Observation, Price},
    progress::Progress,
    specs::catalog::{self, Book},
    store,
};

/// Outcome of one scraper run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Pages fetched and parsed.
    pub pages: u32,
    /// Books that passed the scraper-side filters.
    pub collected: usize,
    /// Observations appended to the log.
    pub logged: usize,
    /// Books priced below the alert threshold.
    pub alerts: usize,
    /// Fetch/parse failure that ended the run early, if any.
    pub error: Option<String>,
}

/// Walk the catalogue from `opts.url`, following "next" links, up to
/// `opts.pages()` pages. Books are filtered as they are found.
/// Returns the kept books and the number of pages read.
pub fn collect_books(
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(Vec<Book>, u32), ScrapeError> {
    let client = net::client()?;
    let mut url = net::parse_url(&opts.url)?;

    let max = opts.pages();
    let mut kept = Vec::new();
    let mut pages = 0u32;

    loop {
        if pages > 0 {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
        }
        logf!("Scrape: fetching page {} of at most {}: {}", pages + 1, max, url);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {url}"));
        }

        let page = catalog::parse_page(&net::http_get(&client, &url)?);
        pages += 1;

        let before = kept.len();
        kept.extend(page.books.into_iter().filter(|b| opts.keeps(&b.title, b.price)));
        logd!("Scrape: page {} kept {} book(s), skipped {} block(s)", pages, kept.len() - before, page.skipped);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(pages, kept.len() - before);
        }

        if pages >= max {
            break;
        }
        let Some(href) = page.next else {
            logd!("Scrape: no next link after page {}", pages);
            break;
        };
        url = net::resolve(&url, &href)?;
    }

    Ok((kept, pages))
}

/// Scrape, alert and append to the price log at `log_path`.
///
/// Any fetch or parse failure is logged, reported in the summary and
/// leaves the log untouched. Only a failed write to the log is an error.
pub fn run(
    opts: &ScrapeOptions,
    log_path: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, StoreError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.pages());
    }

    let mut summary = ScrapeSummary::default();
    let books = match collect_books(opts, progress.as_deref_mut()) {
        Ok((books, pages)) => {
            summary.pages = pages;
            books
        }
        Err(e) => {
            loge!("Scrape: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Scrape failed: {e}"));
                p.finish();
            }
            summary.error = Some(e.to_string());
            return Ok(summary);
        }
    };
    summary.collected = books.len();

    for book in books.iter().filter(|b| opts.alerts_on(b.price)) {
        logw!("Scrape: alert for {:?} at {}", book.title, book.price);
        if let Some(p) = progress.as_deref_mut() {
            p.alert(&book.title, book.price);
        }
        summary.alerts += 1;
    }

    let now = Utc::now().naive_utc().trunc_subsecs(0);
    let rows: Vec<Observation> = books
        .into_iter()
        .map(|b| Observation::new(now, b.title, b.price))
        .collect();

    let result = store::append(log_path, &rows);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary.logged = result?;

    logf!(
        "Scrape: {} page(s), {} book(s) logged, {} alert(s)",
        summary.pages, summary.logged, summary.alerts
    );
    Ok(summary)
}

/// Convenience for alert text shown by frontends.
pub fn alert_line(title: &str, price: Price) -> String {
    format!("ALERT: '{title}' is now \u{a3}{}!", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LogSnapshot;

    #[test]
    fn bad_url_degrades_to_zero_books() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("price_log.csv");
        let opts = ScrapeOptions { url: s!("not a url"), ..Default::default() };

        let summary = run(&opts, &log, None).unwrap();
        assert_eq!(summary.pages, 0);
        assert_eq!(summary.logged, 0);
        assert!(summary.error.is_some());
        assert!(matches!(store::load(&log).unwrap(), LogSnapshot::Missing));
    }

    #[test]
    fn alert_text() {
        assert_eq!(alert_line("Dune", Price::new(9, 5)), "ALERT: 'Dune' is now \u{a3}9.05!");
    }
}
