// src/gui/components/tabs.rs
//
// Top tabs: table or chart pages. Both views read the same dataset.

use eframe::egui;

use crate::config::state::View;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.view;
        for view in View::ALL {
            let selected = view == cur;
            if ui.selectable_label(selected, view.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, view);
                app.state.gui.view = view;
            }
        }
    });
}
