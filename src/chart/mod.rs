// src/chart/mod.rs
//! # Chart pages
//!
//! Splits the ranked dataset into `page_count` contiguous pages and describes
//! each as a dual-axis grouped bar chart: rating per title on the left axis,
//! rating count (thousands) per title on the right axis.
//!
//! ## Slicing
//! Page size is `ceil(len / page_count)`. Pages are in rank order and never
//! overlap; every page but the last has exactly that size, the last holds the
//! remainder. When there are more pages than rows the trailing pages are empty
//! and are reported as such by [`render_pages`], not treated as errors.
//!
//! ## Drawing
//! Drawing is behind [`ChartRenderer`]. The CLI uses [`text::TextRenderer`],
//! the GUI paints with egui. Each page renders on its own; a failure on one
//! page is collected and the rest still render.

pub mod text;

use std::num::NonZeroUsize;

use crate::config::consts::{RATING_MAX, RATING_TICKS};
use crate::data::{Dataset, MovieRecord};
use crate::error::RenderError;

pub const CATEGORY_AXIS: &str = "Film title";
pub const RATING_SERIES: &str = "Rate value";
pub const COUNT_SERIES: &str = "Number of ratings [thousands]";
pub const RATING_AXIS: &str = "Rate";
pub const COUNT_AXIS: &str = "Number of user ratings [thousands]";

/// One contiguous, rank-ordered slice of the dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPage<'a> {
    number: usize,
    start: usize,
    records: &'a [MovieRecord],
}

impl<'a> ChartPage<'a> {
    /// 1-based page number.
    pub fn number(&self) -> usize { self.number }
    /// 0-based index of the first record (inclusive).
    pub fn start(&self) -> usize { self.start }
    /// 0-based index one past the last record.
    pub fn end(&self) -> usize { self.start + self.records.len() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &'a [MovieRecord] { self.records }

    /// 1-based rank range, `None` for an empty page.
    pub fn ranks(&self) -> Option<(usize, usize)> {
        (!self.is_empty()).then(|| (self.start + 1, self.end()))
    }

    pub fn title(&self) -> String {
        match self.ranks() {
            Some((first, last)) => format!("Rank {first} to {last}"),
            None => format!("Page {} (empty)", self.number),
        }
    }

    /// Category labels (titles) in rank order.
    pub fn labels(&self) -> Vec<&'a str> {
        self.records.iter().map(MovieRecord::title).collect()
    }

    pub fn ratings(&self) -> Vec<f64> {
        self.records.iter().map(MovieRecord::rating).collect()
    }

    pub fn counts_thousands(&self) -> Vec<f64> {
        self.records.iter().map(MovieRecord::rating_count_thousands).collect()
    }
}

pub fn page_size(total: usize, page_count: NonZeroUsize) -> usize {
    total.div_ceil(page_count.get())
}

/// Split the dataset into exactly `page_count` pages.
pub fn paginate(dataset: &Dataset, page_count: NonZeroUsize) -> Vec<ChartPage<'_>> {
    let records = dataset.records();
    let total = records.len();
    let size = page_size(total, page_count);
    let count = page_count.get();

    (0..count)
        .map(|i| {
            let start = (i * size).min(total);
            let end = if i + 1 == count { total } else { (start + size).min(total) };
            ChartPage { number: i + 1, start, records: &records[start..end] }
        })
        .collect()
}

/* ---------------- Axes ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub label: &'static str,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Tick values from 0 to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let n = (self.max / self.step).round() as usize;
        (0..=n).map(|i| i as f64 * self.step).collect()
    }

    /// Position of `value` on this axis, clamped to 0..=1.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max <= 0.0 { 0.0 } else { (value / self.max).clamp(0.0, 1.0) }
    }
}

/// Shared scales for every page of one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub rating: Axis,
    pub count: Axis,
}

impl Axes {
    /// Rating axis is fixed 0–10; the count axis is fitted to the largest count.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (max, step) = nice_ceiling(dataset.max_rating_count_thousands());
        Self {
            rating: Axis {
                label: RATING_AXIS,
                max: RATING_MAX,
                step: RATING_MAX / (RATING_TICKS - 1) as f64,
            },
            count: Axis { label: COUNT_AXIS, max, step },
        }
    }
}

/// Round `value` up to a readable axis end with about ten steps of 1, 2, 2.5 or 5 × 10^k.
pub fn nice_ceiling(value: f64) -> (f64, f64) {
    if !value.is_finite() || value <= 0.0 {
        return (1.0, 0.1);
    }
    let raw_step = value / 10.0;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&f| normalized <= f)
        .unwrap_or(10.0);
    let step = factor * magnitude;
    ((value / step).ceil() * step, step)
}

/* ---------------- Rendering ---------------- */

pub trait ChartRenderer {
    fn render(&mut self, page: &ChartPage<'_>, axes: &Axes) -> Result<(), RenderError>;
}

/// Outcome of rendering a set of pages. Page numbers are 1-based.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: Vec<usize>,
    pub skipped_empty: Vec<usize>,
    pub failed: Vec<RenderError>,
}

/// Render each page independently. Empty pages are skipped, failures collected.
pub fn render_pages(pages: &[ChartPage<'_>], axes: &Axes, renderer: &mut dyn ChartRenderer) -> RenderSummary {
    let mut summary = RenderSummary::default();

    for page in pages {
        if page.is_empty() {
            logd!("Chart: Page {} empty, skipped", page.number());
            summary.skipped_empty.push(page.number());
            continue;
        }
        match renderer.render(page, axes) {
            Ok(()) => summary.rendered.push(page.number()),
            Err(e) => {
                loge!("Chart: {e}");
                summary.failed.push(e);
            }
        }
    }
    summary
}
