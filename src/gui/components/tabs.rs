// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;

use crate::{config::state::Tab, gui::app::App};

const TABS: &[(Tab, &str)] = &[(Tab::Dashboard, "Dashboard"), (Tab::Analysis, "Analysis")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for &(tab, title) in TABS {
            let selected = app.state.gui.tab == tab;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.state.gui.tab, tab);
                app.state.gui.tab = tab;
            }
        }
    });
}
