// tests/pipeline_offline.rs
use std::fs;
use std::path::PathBuf;

use imdb_scrape::config::options::{AppOptions, FailurePolicy, Source};
use imdb_scrape::error::{Field, PipelineError};
use imdb_scrape::runner;
use imdb_scrape::scrape::collect_top_chart;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/top_chart.html")
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("imdb_offline_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn local(path: PathBuf) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.fetch.source = Source::LocalFile(path);
    opts
}

#[test]
fn saved_chart_builds_in_rank_order() {
    let (ds, report) = collect_top_chart(&local(fixture()), None).unwrap();

    assert!(report.header_skipped);
    assert_eq!(report.rows_seen, 7);
    assert_eq!(ds.len(), 7);

    let first = ds.get(0).unwrap();
    assert_eq!(first.title(), "The Shawshank Redemption");
    assert_eq!(first.year(), "(1994)");
    assert_eq!(first.rating(), 9.2);
    assert_eq!(first.rating_count(), 2_712_345.0);
    assert_eq!(first.lead_credit(), "Frank Darabont (dir.), Tim Robbins, Morgan Freeman");

    // entity decoded, whitespace normalized
    assert_eq!(ds.get(5).map(|r| r.title()), Some("Schindler's List"));
    assert_eq!(
        ds.get(6).map(|r| r.title()),
        Some("The Lord of the Rings: The Return of the King")
    );
}

#[test]
fn broken_row_abort_vs_skip() {
    let dir = tmp_dir("broken");
    let html = fs::read_to_string(fixture())
        .unwrap()
        .replace(r#"<span name="nv" data-value="805000"></span>"#, "");
    let broken = dir.join("broken.html");
    fs::write(&broken, html).unwrap();

    let mut opts = local(broken);
    match collect_top_chart(&opts, None) {
        Err(PipelineError::Extraction(f)) => {
            assert_eq!(f.row, 5);
            assert_eq!(f.error.field(), Field::RatingCount);
        }
        other => panic!("expected abort on row 5, got {other:?}"),
    }

    opts.extract.on_failure = FailurePolicy::Skip;
    let (ds, report) = collect_top_chart(&opts, None).unwrap();
    assert_eq!(ds.len(), 6);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].row, 5);
    assert!(ds.iter().all(|r| r.title() != "12 Angry Men"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn page_without_rows_is_reported() {
    let dir = tmp_dir("norows");
    let path = dir.join("moved.html");
    fs::write(&path, "<html><body><h1>This chart has moved</h1></body></html>").unwrap();

    let err = collect_top_chart(&local(path), None).unwrap_err();
    assert!(matches!(err, PipelineError::NoRows { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn full_run_writes_the_export() {
    let dir = tmp_dir("run");
    let mut opts = local(fixture());
    opts.export.set_path(&format!("{}/", dir.display()));

    let report = runner::run(&opts, None, None).unwrap();
    let path = report.exported.unwrap();
    assert!(path.ends_with("Movies_imdb.csv"));
    assert!(report.charts.is_none());

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + 7);
    assert_eq!(lines[0], "\u{feff}Title,Rate,Number of ratings,Year,Actors");
    assert_eq!(
        lines[1],
        "The Shawshank Redemption,9.2,2712345,(1994),\"Frank Darabont (dir.), Tim Robbins, Morgan Freeman\""
    );

    let _ = fs::remove_dir_all(&dir);
}
