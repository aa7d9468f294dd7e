// src/gui/components/filter_panel.rs
//
// Sidebar filters. Any change rebuilds the filtered view right away.

use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    let mut changed = false;

    // --- Price range ---
    if let Some((lo_bound, hi_bound)) = app.price_span {
        ui.label("Price range");
        let g = &mut app.state.gui;
        let mut lo = g.price_lo.unwrap_or(lo_bound);
        let mut hi = g.price_hi.unwrap_or(hi_bound);

        changed |= ui
            .add(egui::Slider::new(&mut lo, lo_bound..=hi_bound).text("min").fixed_decimals(2))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut hi, lo_bound..=hi_bound).text("max").fixed_decimals(2))
            .changed();
        if lo > hi {
            // dragging one handle past the other moves both
            hi = lo;
        }
        g.price_lo = Some(lo);
        g.price_hi = Some(hi);
    }

    // --- Title ---
    ui.label("Search title");
    changed |= ui.text_edit_singleline(&mut app.state.gui.title_search).changed();

    // --- Dates ---
    ui.label("Date range (YYYY-MM-DD)");
    if let Some((first, last)) = app.snapshot.observations().and_then(|set| set.time_span()) {
        ui.small(format!("log covers {} to {}", first.date(), last.date()));
    }
    let g = &mut app.state.gui;
    changed |= date_field(ui, "from", &mut g.date_from_text, &mut g.date_from);
    changed |= date_field(ui, "to", &mut g.date_to_text, &mut g.date_to);

    if ui.button("Clear filters").clicked() {
        let g = &mut app.state.gui;
        g.price_lo = app.price_span.map(|s| s.0);
        g.price_hi = app.price_span.map(|s| s.1);
        g.title_search.clear();
        g.date_from_text.clear();
        g.date_to_text.clear();
        g.date_from = None;
        g.date_to = None;
        logf!("UI: Filters cleared");
        changed = true;
    }

    if changed {
        app.rebuild_view();
    }
    ui.horizontal(|ui| {
        ui.label(format!("{} record(s) shown", app.filtered.len()));
        if ui.small_button("Copy CSV").clicked() {
            actions::copy(app, ui.ctx());
        }
    });
}

/// Text field bound to an optional date. Blank clears; invalid text keeps
/// the previous bound and is flagged.
fn date_field(ui: &mut egui::Ui, label: &str, text: &mut String, value: &mut Option<NaiveDate>) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        if ui.add(egui::TextEdit::singleline(text).desired_width(100.0)).changed() {
            let t = text.trim();
            let parsed = if t.is_empty() {
                Some(None)
            } else {
                NaiveDate::parse_from_str(t, "%Y-%m-%d").ok().map(Some)
            };
            if let Some(v) = parsed {
                if v != *value {
                    *value = v;
                    changed = true;
                }
            }
        }
        if !text.trim().is_empty() && NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").is_err() {
            ui.label(RichText::new("?").color(Color32::RED));
        }
    });
    changed
}
