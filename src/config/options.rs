// src/config/options.rs
use std::path::PathBuf;

use crate::analysis::anomaly::DEFAULT_K;
use crate::analysis::Deviation;
use crate::model::Price;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub report: ReportOptions,
    pub log_path: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            report: ReportOptions::default(),
            log_path: default_log_path(),
        }
    }
}

pub fn default_log_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(LOG_FILE)
}

/// Everything one scraper run needs. Passed in, never global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    /// Pages to visit at most; values below 1 mean 1.
    pub page_limit: u32,
    /// Alert for books priced strictly below this.
    pub alert_below: Option<Price>,
    /// Only log books at or below this price.
    pub price_max: Option<Price>,
    /// Only log books whose title contains this (case-insensitive).
    pub title_keyword: Option<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            page_limit: DEFAULT_PAGE_LIMIT,
            alert_below: Some(DEFAULT_ALERT_BELOW),
            price_max: None,
            title_keyword: None,
        }
    }
}

impl ScrapeOptions {
    pub fn pages(&self) -> u32 { self.page_limit.max(1) }

    /// Scraper-side filter on one book.
    pub fn keeps(&self, title: &str, price: Price) -> bool {
        if self.price_max.is_some_and(|max| price > max) {
            return false;
        }
        match self.title_keyword.as_deref() {
            Some(k) if !k.is_empty() => crate::core::sanitize::contains_ci(title, k),
            _ => true,
        }
    }

    pub fn alerts_on(&self, price: Price) -> bool {
        self.alert_below.is_some_and(|t| price < t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    pub top_n: usize,
    pub latest_n: usize,
    pub anomaly_k: f64,
    pub deviation: Deviation,
    pub deal_below: Price,
    pub deals_n: usize,
    pub title_means_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            latest_n: LATEST_N,
            anomaly_k: DEFAULT_K,
            deviation: Deviation::Population,
            deal_below: DEAL_BELOW,
            deals_n: DEALS_N,
            title_means_n: TITLE_MEANS_N,
        }
    }
}
