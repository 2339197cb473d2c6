// src/scrape.rs
//
// Dataset builder: header skip, per-row extraction, failure policy, report.

use scraper::Html;

use crate::{
    config::options::{AppOptions, FailurePolicy},
    core::net,
    data::Dataset,
    error::{PipelineError, RowFailure},
    progress::Progress,
    specs::top_chart::{self, RawRow},
};

/// What happened while building, for display next to the data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildReport {
    pub header_skipped: bool,
    /// Data rows attempted (header excluded).
    pub rows_seen: usize,
    pub rows_extracted: usize,
    /// Skipped rows with reasons, in row order. Empty under the abort policy.
    pub failures: Vec<RowFailure>,
}

impl BuildReport {
    pub fn rows_failed(&self) -> usize {
        self.failures.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} row(s) seen, {} extracted, {} failed",
            self.rows_seen,
            self.rows_extracted,
            self.rows_failed()
        )
    }
}

/// Build the dataset from every row of the document, header first.
///
/// The first row is dropped unconditionally. Under [`FailurePolicy::Abort`] the
/// first failing row ends the build; under [`FailurePolicy::Skip`] it is left out
/// and recorded in the report.
pub fn build_dataset<'a, I>(
    rows: I,
    policy: FailurePolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Dataset, BuildReport), RowFailure>
where
    I: IntoIterator<Item = RawRow<'a>>,
{
    let mut rows = rows.into_iter();
    let mut report = BuildReport { header_skipped: rows.next().is_some(), ..BuildReport::default() };

    let (expected, _) = rows.size_hint();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(expected);
    }

    let mut records = Vec::with_capacity(expected);

    for (ix, row) in rows.enumerate() {
        let rank = ix + 1;
        report.rows_seen += 1;

        match top_chart::extract_row(row) {
            Ok(rec) => {
                records.push(rec);
                report.rows_extracted += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(rank);
                }
            }
            Err(error) => {
                let failure = RowFailure { row: rank, error };
                match policy {
                    FailurePolicy::Abort => {
                        loge!("Build: Aborted at {failure}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.finish();
                        }
                        return Err(failure);
                    }
                    FailurePolicy::Skip => {
                        logw!("Build: Skipped {failure}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(rank, &failure.error.to_string());
                        }
                        report.failures.push(failure);
                    }
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Build: {} (policy={})", report.summary(), policy.as_str());

    Ok((Dataset::from(records), report))
}

/// Parse a whole page and build from its rows.
pub fn build_from_html(
    html: &str,
    policy: FailurePolicy,
    source_desc: &str,
    progress: Option<&mut dyn Progress>,
) -> Result<(Dataset, BuildReport), PipelineError> {
    let doc = Html::parse_document(html);
    let rows = top_chart::rows(&doc);
    if rows.is_empty() {
        loge!("Build: No rows in {source_desc}");
        return Err(PipelineError::NoRows { source_desc: s!(source_desc) });
    }
    logd!("Build: {} row node(s) in {source_desc}", rows.len());
    Ok(build_dataset(rows, policy, progress)?)
}

/// Fetch (or read) the chart page and build the dataset.
pub fn collect_top_chart(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Dataset, BuildReport), PipelineError> {
    opts.fetch.validate()?;

    let source_desc = opts.fetch.source.describe();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {source_desc}…"));
    }

    let html = net::load_source(&opts.fetch)?;
    build_from_html(&html, opts.extract.on_failure, &source_desc, progress)
}
