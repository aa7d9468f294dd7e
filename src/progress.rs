// src/progress.rs
use crate::model::Price;

/// Lightweight progress reporting used by scraper runs.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the page budget.
    fn begin(&mut self, _max_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One catalogue page fetched and parsed; `kept` books passed the filters.
    fn page_done(&mut self, _page: u32, _kept: usize) {}

    /// A kept book is below the alert threshold.
    fn alert(&mut self, _title: &str, _price: Price) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
