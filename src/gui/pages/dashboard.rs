// src/gui/pages/dashboard.rs
//
// Filtered view: headline metrics, price over time, latest prices, deals.

use eframe::egui::{self, RichText};

use crate::{
    analysis::{bands, ranking, stats},
    config::consts::DASHBOARD_LATEST_N,
    gui::{app::App, components::{charts, data_table}},
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let set = &app.filtered;
    let summary = stats::summarize(set);
    let price = |f: fn(&stats::PriceSummary) -> String| {
        summary.prices.as_ref().map(f).unwrap_or_else(|| s!("-"))
    };

    ui.columns(4, |cols| {
        metric(&mut cols[0], "Total Books Logged", summary.count.to_string());
        metric(&mut cols[1], "Avg Price", price(|p| format!("£{:.2}", p.mean)));
        metric(&mut cols[2], "Lowest Price", price(|p| format!("£{}", p.min)));
        metric(&mut cols[3], "Highest Price", price(|p| format!("£{}", p.max)));
    });

    ui.separator();
    ui.heading("Price Over Time");
    charts::price_line(ui, set.as_slice(), 220.0);

    ui.add_space(8.0);
    ui.heading(format!("Latest {DASHBOARD_LATEST_N} Prices"));
    data_table::observations(ui, "latest", &ranking::most_recent_n(set, DASHBOARD_LATEST_N));

    ui.separator();
    let r = &app.state.options.report;
    ui.heading(format!("Top Deals (Under £{})", r.deal_below));
    let deals = bands::deals(set, r.deal_below, r.deals_n);
    if deals.is_empty() {
        ui.label(format!("No top deals found under £{}.", r.deal_below));
    } else {
        data_table::observations(ui, "deals", &deals);
    }
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(22.0).strong());
    });
}
