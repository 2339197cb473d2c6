// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // apply the typed path before reading options
    app.sync_out_path();

    if app.dataset.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!(
        "Export: Begin rows={}, format={:?}, headers={}",
        app.dataset.len(),
        app.state.options.export.format,
        app.state.options.export.include_headers
    );

    let status_msg = match file::write_export(&app.state.options.export, &app.dataset) {
        Ok(path) => {
            app.out_path_text = path.to_string_lossy().into_owned();
            format!("Exported {} row(s) → {}", app.dataset.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
