// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::Source,
        state::{AppState, View},
    },
    data::Dataset,
    scrape::BuildReport,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "IMDb Top 250",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful build
    pub dataset: Dataset,
    pub report: Option<BuildReport>,

    // text fields (we map these <-> FetchOptions / ExportOptions)
    pub source_text: String,
    pub use_local_file: bool,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let (source_text, use_local_file) = match &state.options.fetch.source {
            Source::Remote(url) => (url.clone(), false),
            Source::LocalFile(p) => (p.display().to_string(), true),
        };

        logf!("Init: source={}, pages={}", source_text, state.options.chart.page_count);

        Self {
            state,
            dataset: Dataset::default(),
            report: None,
            source_text,
            use_local_file,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Mirror the source text field → options.fetch.source
    pub fn sync_source_into_fetch(&mut self) {
        let text = self.source_text.trim();
        self.state.options.fetch.source = if self.use_local_file {
            Source::LocalFile(PathBuf::from(text))
        } else {
            Source::Remote(s!(text))
        };
    }

    /// Apply a typed output path, if any.
    pub fn sync_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options")
            .resizable(false)
            .show(ctx, |ui| {
                components::options_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            match self.state.gui.view {
                View::Table => components::data_table::draw(ui, self),
                View::Charts => components::chart_view::draw(ui, self),
            }
        });
    }
}
