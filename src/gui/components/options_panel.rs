// src/gui/components/options_panel.rs
//
// Left panel: source, timeouts, failure policy, chart pages, last build report.

use std::time::Duration;

use eframe::egui;

use crate::config::options::FailurePolicy;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Source");

    ui.horizontal(|ui| {
        ui.selectable_value(&mut app.use_local_file, false, "Web");
        ui.selectable_value(&mut app.use_local_file, true, "Saved file");
    });
    let hint = if app.use_local_file { "path/to/top.html" } else { "https://…" };
    if ui
        .add(egui::TextEdit::singleline(&mut app.source_text).hint_text(hint).font(egui::TextStyle::Monospace))
        .changed()
    {
        logd!("UI: source_text changed → {}", app.source_text);
    }

    ui.add_enabled_ui(!app.use_local_file, |ui| {
        let fetch = &mut app.state.options.fetch;
        timeout_row(ui, "Connect timeout", &mut fetch.connect_timeout);
        timeout_row(ui, "Read timeout", &mut fetch.read_timeout);
    });

    ui.separator();
    ui.heading("Malformed rows");

    let policy = &mut app.state.options.extract.on_failure;
    let before = *policy;
    ui.radio_value(policy, FailurePolicy::Abort, "Abort the scrape");
    ui.radio_value(policy, FailurePolicy::Skip, "Skip and report");
    if *policy != before {
        logf!("UI: Failure policy → {}", policy.as_str());
    }

    ui.separator();
    ui.heading("Charts");

    let mut pages = app.state.options.chart.page_count.get();
    ui.horizontal(|ui| {
        ui.label("Pages:");
        if ui.add(egui::DragValue::new(&mut pages).range(1..=50)).changed() {
            // range keeps it ≥ 1
            if app.state.options.chart.set_page_count(pages).is_ok() {
                app.state.gui.chart_page = 0;
                logf!("UI: Chart pages → {}", pages);
            }
        }
    });

    if let Some(report) = &app.report {
        ui.separator();
        ui.heading("Last scrape");
        ui.label(report.summary());

        if !report.failures.is_empty() {
            egui::CollapsingHeader::new(format!("{} skipped row(s)", report.rows_failed()))
                .default_open(false)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                        for f in &report.failures {
                            ui.label(egui::RichText::new(f.to_string()).small());
                        }
                    });
                });
        }
    }
}

fn timeout_row(ui: &mut egui::Ui, label: &str, value: &mut Duration) {
    let mut secs = value.as_secs_f64();
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        let changed = ui
            .add(egui::DragValue::new(&mut secs).range(0.1..=60.0).speed(0.1).suffix(" s"))
            .changed();
        if changed {
            if let Ok(d) = Duration::try_from_secs_f64(secs) {
                *value = d;
                logd!("UI: {label} → {:?}", d);
            }
        }
    });
}
