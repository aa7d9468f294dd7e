// src/gui/actions.rs
//
// Button actions for the sidebar. Layout stays in the components; the
// operational logic (worker thread, reload, settings file) lives here.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::file as settings,
    csv,
    gui::{app::App, progress::GuiProgress},
    model::Observation,
    scrape, store,
};

/// Start a scraper run on a worker thread. No-op while one is running.
pub fn scrape(app: &mut App) {
    if app.scraping() {
        return;
    }

    match app.state.gui.page_limit_text.trim().parse::<u32>() {
        Ok(n) if n >= 1 => app.state.options.scrape.page_limit = n,
        _ => {
            app.status(format!("Invalid page limit: {:?}", app.state.gui.page_limit_text));
            return;
        }
    }

    let opts = app.state.options.scrape.clone();
    let log_path = app.state.options.log_path.clone();
    let status = app.status.clone();
    let alerts = app.alerts.clone();

    logf!("Scrape: Begin url={} pages={}", opts.url, opts.pages());
    app.status("Scraping...");

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, alerts);
        let res = scrape::run(&opts, &log_path, Some(&mut prog)).map_err(|e| e.to_string());
        // receiver gone means the window closed
        let _ = tx.send(res);
    });
    app.worker = Some(rx);
}

/// Pick up a finished worker, if any, and reload the log.
pub fn poll_scrape(app: &mut App, ctx: &egui::Context) {
    let Some(rx) = &app.worker else { return };

    match rx.try_recv() {
        Ok(Ok(summary)) => {
            app.worker = None;
            logf!("Scrape: OK logged={} alerts={}", summary.logged, summary.alerts);
            app.reload();
            let msg = match &summary.error {
                Some(e) => format!("Scrape failed: {e}"),
                None => format!("Scraped {} page(s), logged {} book(s)", summary.pages, summary.logged),
            };
            app.status(msg);
        }
        Ok(Err(e)) => {
            app.worker = None;
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Empty) => {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        Err(TryRecvError::Disconnected) => {
            app.worker = None;
            loge!("Scrape: worker ended without a result");
            app.status("Error: scraper stopped unexpectedly");
        }
    }
}

/// Filtered rows, with the log header, onto the clipboard.
pub fn copy(app: &App, ctx: &egui::Context) {
    if app.filtered.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }
    let rows: Vec<Vec<String>> = app.filtered.iter().map(Observation::to_row).collect();
    let txt = csv::rows_to_string(Some(&store::HEADERS[..]), &rows, csv::SEP);
    ctx.copy_text(txt);
    logf!("Copy: {} row(s)", rows.len());
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}

pub fn reload(app: &mut App) {
    logf!("UI: Reload requested");
    app.reload();
}

pub fn save_settings(app: &mut App) {
    if let Ok(n) = app.state.gui.page_limit_text.trim().parse::<u32>() {
        app.state.options.scrape.page_limit = n.max(1);
    }
    match settings::save(&app.config_path, &app.state.options) {
        Ok(()) => {
            logf!("Config: saved {}", app.config_path.display());
            app.status(format!("Settings saved to {}", app.config_path.display()));
        }
        Err(e) => {
            loge!("Config: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
