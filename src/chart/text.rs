// src/chart/text.rs
//! Terminal rendering: two horizontal bars per title, one per axis.

use std::io::{self, Write};

use super::{Axes, Axis, ChartPage, ChartRenderer, COUNT_SERIES, RATING_SERIES};
use crate::error::RenderError;

pub const MIN_WIDTH: usize = 40;

const RATING_BAR: char = '█';
const COUNT_BAR: char = '░';
const VALUE_COLS: usize = 10;

pub struct TextRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label_cols(&self) -> usize {
        (self.width * 2 / 5).max(12)
    }

    fn bar_cols(&self) -> usize {
        // "label |bar value"
        self.width.saturating_sub(self.label_cols() + VALUE_COLS + 2)
    }

    fn write_page(&mut self, page: &ChartPage<'_>, axes: &Axes) -> io::Result<()> {
        let label_cols = self.label_cols();
        let bar_cols = self.bar_cols();

        writeln!(self.out, "== {} ==", page.title())?;
        writeln!(
            self.out,
            "{RATING_BAR} {RATING_SERIES} [0..{}]   {COUNT_BAR} {COUNT_SERIES} [0..{}]",
            axes.rating.max, axes.count.max
        )?;
        writeln!(self.out, "{}", "-".repeat(self.width))?;

        for (i, rec) in page.records().iter().enumerate() {
            let label = fit_label(&format!("{:>3}. {}", page.start() + i + 1, rec.title()), label_cols);
            let rating = rec.rating();
            let count = rec.rating_count_thousands();

            writeln!(
                self.out,
                "{label:<label_cols$} |{} {rating}",
                bar(&axes.rating, rating, bar_cols, RATING_BAR)
            )?;
            writeln!(
                self.out,
                "{:<label_cols$} |{} {count}",
                "",
                bar(&axes.count, count, bar_cols, COUNT_BAR)
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> ChartRenderer for TextRenderer<W> {
    fn render(&mut self, page: &ChartPage<'_>, axes: &Axes) -> Result<(), RenderError> {
        if self.width < MIN_WIDTH {
            return Err(RenderError::TooNarrow { page: page.number(), width: self.width, min: MIN_WIDTH });
        }
        self.write_page(page, axes)
            .map_err(|source| RenderError::Io { page: page.number(), source })
    }
}

/// Bar of `cols` cells, filled in proportion to `value` on `axis`, padded with spaces.
fn bar(axis: &Axis, value: f64, cols: usize, fill: char) -> String {
    let n = ((axis.fraction(value) * cols as f64).round() as usize).min(cols);
    let mut s = String::with_capacity(cols * fill.len_utf8());
    s.extend(std::iter::repeat_n(fill, n));
    s.extend(std::iter::repeat_n(' ', cols - n));
    s
}

fn fit_label(label: &str, cols: usize) -> String {
    if label.chars().count() <= cols {
        return s!(label);
    }
    let mut cut: String = label.chars().take(cols.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::paginate;
    use crate::data::{Dataset, MovieRecord};
    use std::num::NonZeroUsize;

    fn dataset() -> Dataset {
        vec![
            MovieRecord::new("Short", "(1994)", 10.0, 2_000_000.0, "A").unwrap(),
            MovieRecord::new("A title that is much too long for the label column", "(1972)", 5.0, 1_000_000.0, "B").unwrap(),
        ]
        .into()
    }

    #[test]
    fn bars_scale_with_value() {
        let axis = Axis { label: "x", max: 10.0, step: 1.0 };
        assert_eq!(bar(&axis, 10.0, 4, '#'), "####");
        assert_eq!(bar(&axis, 5.0, 4, '#'), "##  ");
        assert_eq!(bar(&axis, 0.0, 4, '#'), "    ");
        assert_eq!(bar(&axis, 50.0, 4, '#'), "####");
    }

    #[test]
    fn long_labels_truncated() {
        assert_eq!(fit_label("abcdef", 4), "abc…");
        assert_eq!(fit_label("abc", 4), "abc");
    }

    #[test]
    fn renders_title_and_rows() {
        let ds = dataset();
        let axes = Axes::for_dataset(&ds);
        let pages = paginate(&ds, NonZeroUsize::MIN);

        let mut r = TextRenderer::new(Vec::new(), 80);
        r.render(&pages[0], &axes).unwrap();
        let text = String::from_utf8(r.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== Rank 1 to 2 ==");
        assert!(lines[1].contains(RATING_SERIES));
        assert!(lines[1].contains(COUNT_SERIES));
        assert!(lines[3].starts_with("  1. Short"));
        assert!(lines[3].ends_with(" 10"));
        assert!(lines[4].ends_with(" 2000"));
        assert!(lines[5].contains('…'));
        // first title fills the rating bar, second fills half
        let full = lines[3].matches(RATING_BAR).count();
        let half = lines[5].matches(RATING_BAR).count();
        assert_eq!(full, 2 * half);
    }

    #[test]
    fn too_narrow_is_a_page_error() {
        let ds = dataset();
        let axes = Axes::for_dataset(&ds);
        let pages = paginate(&ds, NonZeroUsize::MIN);

        let mut r = TextRenderer::new(Vec::new(), 20);
        let err = r.render(&pages[0], &axes).unwrap_err();
        assert!(matches!(err, RenderError::TooNarrow { page: 1, width: 20, min: MIN_WIDTH }));
        assert!(r.into_inner().is_empty());
    }
}
