// src/gui/components/scraper_panel.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Scraper Controls");

    ui.label("Catalogue URL");
    ui.text_edit_singleline(&mut app.state.options.scrape.url);

    ui.horizontal(|ui| {
        ui.label("Max pages");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.page_limit_text).desired_width(48.0));
    });

    let running = app.scraping();
    ui.horizontal(|ui| {
        if ui.add_enabled(!running, egui::Button::new("Scrape Now")).clicked() {
            actions::scrape(app);
        }
        if ui.add_enabled(!running, egui::Button::new("Reload")).clicked() {
            actions::reload(app);
        }
    });
    if ui.button("Save settings").clicked() {
        actions::save_settings(app);
    }

    let alerts: Vec<String> = app.alerts.lock().map(|a| a.clone()).unwrap_or_default();
    if !alerts.is_empty() {
        ui.separator();
        ui.label(RichText::new(format!("{} price alert(s)", alerts.len())).strong());
        egui::ScrollArea::vertical()
            .id_salt("alerts_scroll")
            .max_height(160.0)
            .show(ui, |ui| {
                for a in &alerts {
                    ui.label(RichText::new(a).color(Color32::from_rgb(200, 120, 0)));
                }
            });
    }
}
