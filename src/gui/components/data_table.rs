// src/gui/components/data_table.rs
//
// Draws the dataset as a table in rank order. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 6] = ["#", "Title", "Year", "Rate", "Ratings [k]", "Actors"];
const WIDTHS: [f32; 6] = [36.0, 260.0, 60.0, 44.0, 84.0, 320.0];
const NUMERIC: [bool; 6] = [true, false, false, true, true, false];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.dataset.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No data yet. Press SCRAPE.");
        });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("movies_table");
    for (i, &w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(w).resizable(true).clip(true).at_least(20.0);
        table = table.column(if i + 1 == WIDTHS.len() { col.at_least(120.0) } else { col });
    }

    let records = app.dataset.records();

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, records.len(), |mut row| {
                let ix = row.index();
                let Some(rec) = records.get(ix) else { return };
                let cells = [
                    (ix + 1).to_string(),
                    s!(rec.title()),
                    s!(rec.year()),
                    format!("{:.1}", rec.rating()),
                    format!("{:.1}", rec.rating_count_thousands()),
                    s!(rec.lead_credit()),
                ];
                for (ci, cell) in cells.into_iter().enumerate() {
                    row.col(|ui| {
                        if NUMERIC[ci] {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(cell);
                            });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
