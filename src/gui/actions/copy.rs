// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.dataset.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = csv::to_clipboard_string(&app.state.options.export, &app.dataset);
    logf!("Copy: rows={}, format={:?}", app.dataset.len(), app.state.options.export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
