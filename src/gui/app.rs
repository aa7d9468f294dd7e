// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::{self, DateBound, FilterCriteria},
    config::{
        consts::{DEBUG_LOG_FILE, SETTINGS_FILE, STORE_DIR},
        file as settings,
        state::{AppState, Tab},
    },
    logger::{self, LogTarget},
    model::{ObservationSet, Price},
    report::Report,
    scrape::ScrapeSummary,
    store::{self, LogSnapshot},
};

use super::{actions, components, pages};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    logger::init(LogTarget::File(PathBuf::from(STORE_DIR).join(DEBUG_LOG_FILE)));

    let config_path = PathBuf::from(SETTINGS_FILE);
    let mut state = AppState::default();
    match settings::load(&config_path) {
        Ok(opts) => state.options = opts,
        Err(e) => loge!("Config: {} (using defaults)", e),
    }
    state.gui.page_limit_text = state.options.scrape.page_limit.to_string();

    eframe::run_native(
        "Book Price Tracker",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, config_path)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub config_path: PathBuf,

    // whole log as last loaded, plus the views derived from it
    pub snapshot: LogSnapshot,
    pub filtered: ObservationSet,
    pub report: Option<Report>,
    /// Data price range, for the slider bounds.
    pub price_span: Option<(f64, f64)>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub alerts: Arc<Mutex<Vec<String>>>,
    pub worker: Option<Receiver<Result<ScrapeSummary, String>>>,
}

impl App {
    pub fn new(state: AppState, config_path: PathBuf) -> Self {
        let mut app = Self {
            state,
            config_path,
            snapshot: LogSnapshot::Missing,
            filtered: ObservationSet::new(),
            report: None,
            price_span: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            alerts: Arc::new(Mutex::new(Vec::new())),
            worker: None,
        };
        app.reload();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn scraping(&self) -> bool { self.worker.is_some() }

    /// Re-read the log from disk and rebuild every view.
    pub fn reload(&mut self) {
        let path = self.state.options.log_path.clone();
        self.snapshot = match store::load(&path) {
            Ok(s) => s,
            Err(e) => {
                loge!("Store: {}", e);
                self.status(format!("Error: {e}"));
                LogSnapshot::Missing
            }
        };

        let span = self
            .snapshot
            .observations()
            .and_then(|set| set.price_span())
            .map(|(lo, hi)| (lo.as_f64(), hi.as_f64()));
        if span != self.price_span {
            // new data range: widen the sliders to cover it
            self.price_span = span;
            self.state.gui.price_lo = span.map(|s| s.0);
            self.state.gui.price_hi = span.map(|s| s.1);
        }

        self.report = self
            .snapshot
            .observations()
            .map(|set| Report::build(set, &self.state.options.report));

        match &self.snapshot {
            LogSnapshot::Loaded(r) => {
                logf!("UI: Loaded {} record(s) ({} skipped)", r.observations.len(), r.skipped);
                self.status(format!("Loaded {} record(s)", r.observations.len()));
            }
            other => self.status(other.describe()),
        }
        self.rebuild_view();
    }

    /// Sidebar state → typed criteria. Dates compare by calendar day.
    pub fn criteria(&self) -> FilterCriteria {
        let g = &self.state.gui;
        let title = g.title_search.trim();
        FilterCriteria {
            title: (!title.is_empty()).then(|| s!(title)),
            price_min: g.price_lo.and_then(Price::from_f64),
            price_max: g.price_hi.and_then(Price::from_f64),
            date_start: g.date_from.map(DateBound::On),
            date_end: g.date_to.map(DateBound::On),
        }
    }

    /// Recompute the filtered set from the loaded log and the sidebar.
    pub fn rebuild_view(&mut self) {
        self.filtered = match self.snapshot.observations() {
            Some(set) => analysis::filter(set, &self.criteria()),
            None => ObservationSet::new(),
        };
        logd!("UI: view rebuilt, {} record(s) shown", self.filtered.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self, ctx);

        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    components::filter_panel::draw(ui, self);
                    ui.separator();
                    components::scraper_panel::draw(ui, self);
                });
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.scraping() {
                    ui.add(egui::Spinner::new());
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            if let Some(msg) = empty_message(&self.snapshot) {
                ui.centered_and_justified(|ui| ui.heading(msg));
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.gui.tab {
                Tab::Dashboard => pages::dashboard::draw(ui, self),
                Tab::Analysis => pages::analysis::draw(ui, self),
            });
        });
    }
}

fn empty_message(snapshot: &LogSnapshot) -> Option<&'static str> {
    match snapshot {
        LogSnapshot::Loaded(_) => None,
        other => Some(other.describe()),
    }
}
