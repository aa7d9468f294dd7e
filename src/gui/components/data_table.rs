// src/gui/components/data_table.rs
//
// Read-only observation table. Purely a view.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::model::{format_timestamp, Observation};

const ROW_H: f32 = 20.0;

/// `id` keeps several tables on one page apart.
pub fn observations(ui: &mut egui::Ui, id: &str, rows: &[Observation]) {
    if rows.is_empty() {
        ui.label("No entries.");
        return;
    }

    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(150.0).resizable(true).at_least(60.0))
            .column(Column::remainder().clip(true).at_least(120.0))
            .column(Column::initial(70.0).at_least(50.0))
            .header(24.0, |mut header| {
                header.col(|ui| { ui.label(RichText::new("Timestamp").strong()); });
                header.col(|ui| { ui.label(RichText::new("Title").strong()); });
                header.col(|ui| { ui.label(RichText::new("Price").strong()); });
            })
            .body(|body| {
                body.rows(ROW_H, rows.len(), |mut row| {
                    let obs = &rows[row.index()];
                    row.col(|ui| { ui.label(format_timestamp(&obs.timestamp)); });
                    row.col(|ui| { ui.label(&obs.title); });
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(obs.price.to_string());
                        });
                    });
                });
            });
    });
}

/// Generic text table for derived rows (changes, daily trends).
pub fn text(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        ui.label("No entries.");
        return;
    }

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui).striped(true).vscroll(false);
        for i in 0..headers.len() {
            let col = if i == 0 {
                Column::initial(220.0).resizable(true).clip(true)
            } else {
                Column::initial(110.0).resizable(true)
            };
            table = table.column(col);
        }
        table
            .header(24.0, |mut header| {
                for h in headers {
                    header.col(|ui| { ui.label(RichText::new(*h).strong()); });
                }
            })
            .body(|body| {
                body.rows(ROW_H, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for c in cells {
                        row.col(|ui| { ui.label(c); });
                    }
                });
            });
    });
}
