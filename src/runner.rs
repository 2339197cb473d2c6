// src/runner.rs
use std::path::PathBuf;

use crate::{
    chart::{self, Axes, ChartRenderer, RenderSummary},
    config::options::AppOptions,
    data::Dataset,
    error::{ExportError, PipelineError},
    file,
    progress::{self, Progress},
    scrape::{self, BuildReport},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunReport {
    pub dataset: Dataset,
    pub build: BuildReport,
    pub exported: Option<PathBuf>,
    /// Export failure. Does not stop chart rendering.
    pub export_error: Option<ExportError>,
    /// `None` when charts are disabled or no renderer was given.
    pub charts: Option<RenderSummary>,
}

/// Top-level pipeline: collect, export, chart.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
    renderer: Option<&mut dyn ChartRenderer>,
) -> Result<RunReport, PipelineError> {
    let (dataset, build) = scrape::collect_top_chart(opts, progress::reborrow(&mut progress))?;

    let (exported, export_error) = if opts.export.enabled {
        match file::write_export(&opts.export, &dataset) {
            Ok(path) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Exported {} → {}", dataset.len(), path.display()));
                }
                (Some(path), None)
            }
            Err(e) => {
                loge!("Run: Export failed: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Export failed: {e}"));
                }
                (None, Some(e))
            }
        }
    } else {
        (None, None)
    };

    let charts = match renderer {
        Some(r) if opts.chart.enabled => Some(render_charts(&dataset, opts, r)),
        _ => None,
    };

    Ok(RunReport { dataset, build, exported, export_error, charts })
}

pub fn render_charts(dataset: &Dataset, opts: &AppOptions, renderer: &mut dyn ChartRenderer) -> RenderSummary {
    let axes = Axes::for_dataset(dataset);
    let pages = chart::paginate(dataset, opts.chart.page_count);
    let summary = chart::render_pages(&pages, &axes, renderer);
    logf!(
        "Run: Charts rendered={} empty={} failed={}",
        summary.rendered.len(),
        summary.skipped_empty.len(),
        summary.failed.len()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartPage;
    use crate::config::options::Source;
    use crate::error::RenderError;
    use std::fs;
    use std::num::NonZeroUsize;

    const PAGE: &str = r#"<table><tr><th>header</th></tr>
        <tr><td class="posterColumn"><span name="rk" data-value="1"></span><span name="ir" data-value="9.2"></span>
            <span name="us" data-value="0"></span><span name="nv" data-value="2500000"></span></td>
            <td class="titleColumn">1. <a title="Frank Darabont (dir.), Tim Robbins">The Shawshank Redemption</a>
            <span class="secondaryInfo">(1994)</span></td>
            <td class="ratingColumn imdbRating"><strong>9.2</strong></td></tr>
        <tr><td class="posterColumn"><span name="rk" data-value="2"></span><span name="ir" data-value="9.1"></span>
            <span name="us" data-value="0"></span><span name="nv" data-value="1700000"></span></td>
            <td class="titleColumn">2. <a title="Francis Ford Coppola (dir.), Marlon Brando">The Godfather</a>
            <span class="secondaryInfo">(1972)</span></td>
            <td class="ratingColumn imdbRating"><strong>9.1</strong></td></tr>
        </table>"#;

    fn scratch(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("imdb_scrape_runner_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[derive(Default)]
    struct Pages(Vec<String>);
    impl ChartRenderer for Pages {
        fn render(&mut self, page: &ChartPage<'_>, _axes: &Axes) -> Result<(), RenderError> {
            self.0.push(page.title());
            Ok(())
        }
    }

    #[test]
    fn offline_run_exports_and_charts() {
        let dir = scratch("ok");
        let input = dir.join("top.html");
        fs::write(&input, PAGE).unwrap();

        let mut opts = AppOptions::default();
        opts.fetch.source = Source::LocalFile(input);
        opts.export.set_path(&dir.join("movies.csv").to_string_lossy());
        opts.chart.page_count = NonZeroUsize::new(2).unwrap();

        let mut pages = Pages::default();
        let report = run(&opts, None, Some(&mut pages)).unwrap();

        assert_eq!(report.dataset.len(), 2);
        assert!(report.export_error.is_none());
        let path = report.exported.unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("The Godfather,9.1,1700000,(1972)"));
        assert_eq!(pages.0, vec!["Rank 1 to 1", "Rank 2 to 2"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_failure_still_renders_charts() {
        let dir = scratch("blocked");
        let input = dir.join("top.html");
        fs::write(&input, PAGE).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let mut opts = AppOptions::default();
        opts.fetch.source = Source::LocalFile(input);
        opts.export.set_path(&blocker.join("movies.csv").to_string_lossy());

        let mut pages = Pages::default();
        let report = run(&opts, None, Some(&mut pages)).unwrap();

        assert!(report.exported.is_none());
        assert!(report.export_error.is_some());
        assert_eq!(report.charts.map(|c| c.rendered.len()), Some(2));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_input_is_a_fetch_error() {
        let mut opts = AppOptions::default();
        opts.fetch.source = Source::LocalFile(PathBuf::from("definitely/not/here.html"));
        let err = run(&opts, None, None).unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(_)));
    }
}
