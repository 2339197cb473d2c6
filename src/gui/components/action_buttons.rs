// src/gui/components/action_buttons.rs

use eframe::egui;

use crate::{config::options::ExportFormat, gui::actions, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + BOM ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
            if ui
                .checkbox(&mut export.bom, "BOM")
                .on_hover_text("Prefix the file with a UTF-8 byte order mark (spreadsheet apps pick up the encoding)")
                .changed()
            {
                logf!("UI: BOM → {}", export.bom);
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            // refresh the extension unless the user typed their own
            if !app.out_path_dirty && !export.has_custom_ext() {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
                logd!("UI: out_path_text refreshed to match format");
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // Actions: Copy / Export / Scrape
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Export").clicked() {
            actions::export(app);
        }

        let gold = egui::Color32::from_rgb(245, 197, 24);
        let black = egui::Color32::BLACK;

        let button_scrape =
            ui.add(egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(gold));

        if button_scrape.clicked() {
            actions::scrape(app);
        }

        ui.label(app.status_text());
    });
}
