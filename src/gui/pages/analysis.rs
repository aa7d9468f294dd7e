// src/gui/pages/analysis.rs
//
// Full report over the whole log; sidebar filters do not apply here.

use eframe::egui::{self, RichText};

use crate::{
    analysis::PriceChange,
    gui::{app::App, components::{charts, data_table}},
    model::{format_timestamp, Price},
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(report) = &app.report else {
        ui.label("No data in price log.");
        return;
    };
    let o = &report.options;

    ui.heading("Advanced Analytics");
    ui.separator();

    subheading(ui, "Summary Statistics");
    let p = report.stats.prices.as_ref();
    let na = || s!("n/a");
    stat(ui, "Mean price", p.map(|p| format!("£{:.2}", p.mean)).unwrap_or_else(na));
    stat(ui, "Median price", p.map(|p| format!("£{:.2}", p.median)).unwrap_or_else(na));
    stat(
        ui,
        "Std deviation",
        p.and_then(|p| p.stddev).map(|s| format!("£{s:.2}")).unwrap_or_else(na),
    );
    stat(ui, "Unique titles", report.stats.unique_titles.to_string());
    stat(ui, "Total entries", report.stats.count.to_string());

    ui.separator();
    subheading(ui, &format!("Top {} Cheapest Books", o.top_n));
    data_table::observations(ui, "cheapest", &report.cheapest);
    subheading(ui, &format!("Top {} Most Expensive Books", o.top_n));
    data_table::observations(ui, "priciest", &report.priciest);

    ui.separator();
    subheading(ui, "Books with Price Changes (since previous log)");
    changes(ui, "changes", &report.changes, "No price changes detected.");

    ui.separator();
    subheading(ui, "Biggest Price Drop");
    changes(ui, "drop", report.biggest_drop.as_slice(), "No price drops detected.");
    subheading(ui, "Biggest Price Increase");
    changes(ui, "increase", report.biggest_increase.as_slice(), "No price increases detected.");

    ui.separator();
    subheading(ui, "Daily Price Trends (min, max, mean)");
    let daily: Vec<Vec<String>> = report
        .daily
        .iter()
        .map(|d| vec![d.date.to_string(), d.min.to_string(), d.max.to_string(), format!("{:.2}", d.mean), d.count.to_string()])
        .collect();
    data_table::text(ui, "daily", &["Date", "Min", "Max", "Mean", "Count"], &daily);

    ui.separator();
    subheading(ui, &format!("Price Anomaly Detection (prices outside {} std dev)", o.anomaly_k));
    if let Some(b) = &report.anomaly_band {
        ui.label(format!("Accepted range: £{:.2} to £{:.2}", b.lower, b.upper));
    }
    if report.anomalies.is_empty() {
        ui.label("No price anomalies detected.");
    } else {
        data_table::observations(ui, "anomalies", &report.anomalies);
    }

    ui.separator();
    subheading(ui, "Duplicate Entry Detection");
    if report.duplicates.is_empty() {
        ui.label("No duplicate entries found.");
    } else {
        data_table::observations(ui, "duplicates", &report.duplicates);
    }

    ui.separator();
    subheading(ui, "Price Distribution (by Price Range)");
    let bands: Vec<(String, f64)> = report
        .bands
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| (format!("£{}", b.label), b.count as f64))
        .collect();
    charts::bars(ui, &bands, |v| format!("{v:.0}"));

    subheading(ui, &format!("Price by Book (Top {})", o.title_means_n));
    charts::bars(ui, &report.title_means, |v| format!("£{v:.2}"));
}

fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).heading().size(16.0));
}

fn stat(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}

fn changes(ui: &mut egui::Ui, id: &str, rows: &[PriceChange], none: &str) {
    if rows.is_empty() {
        ui.label(none);
        return;
    }
    let signed = |d: Price| if d.is_negative() { d.to_string() } else { format!("+{d}") };
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|c| {
            vec![
                c.title.clone(),
                format_timestamp(&c.timestamp),
                c.previous.to_string(),
                c.current.to_string(),
                signed(c.delta),
            ]
        })
        .collect();
    data_table::text(ui, id, &["Title", "Timestamp", "Previous", "Price", "Change"], &rows);
}
