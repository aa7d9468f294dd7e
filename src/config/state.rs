// src/config/state.rs
use chrono::NaiveDate;

use super::options::AppOptions;

/// Which dashboard tab is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Analysis,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub tab: Tab,

    /// Sidebar filters; `None` until data gives them a range.
    pub price_lo: Option<f64>,
    pub price_hi: Option<f64>,
    pub title_search: String,

    /// Date-picker text (YYYY-MM-DD); compared by calendar day.
    pub date_from_text: String,
    pub date_to_text: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,

    /// Scraper page-limit field as typed.
    pub page_limit_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: Tab::Dashboard,
            price_lo: None,
            price_hi: None,
            title_search: s!(),
            date_from_text: s!(),
            date_to_text: s!(),
            date_from: None,
            date_to: None,
            page_limit_text: s!("1"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
