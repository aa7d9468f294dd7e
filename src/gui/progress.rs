// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{model::Price, progress::Progress, scrape};

/// Forwards scraper progress into the shared status line and alert list.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    alerts: Arc<Mutex<Vec<String>>>,
    done: u32,
    total: u32,
    books: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, alerts: Arc<Mutex<Vec<String>>>) -> Self {
        Self { status, alerts, done: 0, total: 0, books: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, max_pages: u32) {
        self.total = max_pages;
        if let Ok(mut a) = self.alerts.lock() {
            a.clear();
        }
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, page: u32, kept: usize) {
        self.done = page;
        self.books += kept;
        self.set_status(format!("Fetched page {}/{} ({} book(s))", self.done, self.total, self.books));
    }
    fn alert(&mut self, title: &str, price: Price) {
        if let Ok(mut a) = self.alerts.lock() {
            a.push(scrape::alert_line(title, price));
        }
    }
    fn finish(&mut self) {
        if self.done == 0 {
            self.set_status(s!("Scrape finished"));
        } else {
            self.set_status(format!("Scrape finished ({}/{} pages)", self.done, self.total));
        }
    }
}
