// src/gui/actions/scrape.rs
use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

pub fn scrape(app: &mut App) {
    // Align fetch options with the text field
    app.sync_source_into_fetch();

    logf!(
        "Scrape: Begin source={} policy={}",
        app.state.options.fetch.source.describe(),
        app.state.options.extract.on_failure.as_str()
    );

    let mut prog = GuiProgress::new(app.status.clone());

    match scrape::collect_top_chart(&app.state.options, Some(&mut prog)) {
        Ok((dataset, report)) => {
            logf!("Scrape: OK {}", report.summary());
            app.status(format!("Ready: {}", report.summary()));
            app.dataset = dataset;
            app.report = Some(report);
            app.state.gui.chart_page = 0;
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }

}
