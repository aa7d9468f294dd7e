// src/config/consts.rs
use crate::model::Price;

// Net config
pub const DEFAULT_URL: &str = "https://books.toscrape.com/";
pub const USER_AGENT: &str = concat!("bookwatch/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const DEFAULT_PAGE_LIMIT: u32 = 1;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const DEFAULT_ALERT_BELOW: Price = Price::new(20, 0);

// Price log
pub const DATA_DIR: &str = "data";
pub const LOG_FILE: &str = "price_log.csv";

// Local state
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "bookwatch.conf";

// Report
pub const TOP_N: usize = 5;
pub const LATEST_N: usize = 5;
pub const DASHBOARD_LATEST_N: usize = 10;
pub const DEAL_BELOW: Price = Price::new(20, 0);
pub const DEALS_N: usize = 10;
pub const TITLE_MEANS_N: usize = 20;
