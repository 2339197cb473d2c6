// src/data.rs
//
// Typed records and the rank-ordered dataset. Both are read-only once built:
// fields are private and only validated constructors exist.

use crate::config::consts::{RATING_MAX, RATING_MIN};
use crate::error::{ExtractionError, Field};

/// One ranked title.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieRecord {
    title: String,
    year: String,
    rating: f64,
    rating_count: f64,
    lead_credit: String,
}

impl MovieRecord {
    /// Build a record, checking the field invariants.
    /// `year` is kept verbatim, brackets and all.
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        rating: f64,
        rating_count: f64,
        lead_credit: impl Into<String>,
    ) -> Result<Self, ExtractionError> {
        let title = title.into();
        let year = year.into();
        let lead_credit = lead_credit.into();

        if title.trim().is_empty() {
            return Err(ExtractionError::Empty { field: Field::Title });
        }
        if year.trim().is_empty() {
            return Err(ExtractionError::Empty { field: Field::Year });
        }
        if lead_credit.trim().is_empty() {
            return Err(ExtractionError::Empty { field: Field::LeadCredit });
        }
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ExtractionError::OutOfRange {
                field: Field::Rating,
                value: rating,
                min: RATING_MIN,
                max: RATING_MAX,
            });
        }
        if !rating_count.is_finite() || rating_count < 0.0 {
            return Err(ExtractionError::OutOfRange {
                field: Field::RatingCount,
                value: rating_count,
                min: 0.0,
                max: f64::INFINITY,
            });
        }

        Ok(Self { title, year, rating, rating_count, lead_credit })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn year(&self) -> &str { &self.year }
    pub fn rating(&self) -> f64 { self.rating }
    pub fn rating_count(&self) -> f64 { self.rating_count }
    pub fn lead_credit(&self) -> &str { &self.lead_credit }

    /// Display-only unit: number of ratings in thousands.
    pub fn rating_count_thousands(&self) -> f64 {
        self.rating_count / 1000.0
    }
}

/// Records in source ranking order (rank 1 first).
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[MovieRecord] { &self.records }
    pub fn get(&self, ix: usize) -> Option<&MovieRecord> { self.records.get(ix) }
    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> { self.records.iter() }

    /// Largest rating count in thousands (0.0 when empty).
    pub fn max_rating_count_thousands(&self) -> f64 {
        self.records
            .iter()
            .map(MovieRecord::rating_count_thousands)
            .fold(0.0, f64::max)
    }
}

impl From<Vec<MovieRecord>> for Dataset {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MovieRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MovieRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_year_verbatim_and_scales_count_for_display() {
        let r = MovieRecord::new("Film A", "(1994)", 9.3, 2_500_000.0, "Dir A, Actor A").unwrap();
        assert_eq!(r.year(), "(1994)");
        assert_eq!(r.rating_count(), 2_500_000.0);
        assert_eq!(r.rating_count_thousands(), 2500.0);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(MovieRecord::new("a", "(2000)", 0.0, 0.0, "x").is_ok());
        assert!(MovieRecord::new("a", "(2000)", 10.0, 0.0, "x").is_ok());

        let err = MovieRecord::new("a", "(2000)", 10.5, 1.0, "x").unwrap_err();
        assert_eq!(err.field(), Field::Rating);
        let err = MovieRecord::new("a", "(2000)", f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(err.field(), Field::Rating);
    }

    #[test]
    fn negative_count_and_blank_text_rejected() {
        let err = MovieRecord::new("a", "(2000)", 8.0, -1.0, "x").unwrap_err();
        assert_eq!(err.field(), Field::RatingCount);
        assert_eq!(
            MovieRecord::new(" ", "(2000)", 8.0, 1.0, "x").unwrap_err(),
            ExtractionError::Empty { field: Field::Title }
        );
        assert_eq!(
            MovieRecord::new("a", "", 8.0, 1.0, "x").unwrap_err(),
            ExtractionError::Empty { field: Field::Year }
        );
        assert_eq!(
            MovieRecord::new("a", "(2000)", 8.0, 1.0, "").unwrap_err(),
            ExtractionError::Empty { field: Field::LeadCredit }
        );
    }

    #[test]
    fn max_count_over_dataset() {
        let ds: Dataset = [1_000.0, 2_400_000.0, 15_000.0]
            .into_iter()
            .map(|n| MovieRecord::new("t", "(1)", 8.0, n, "c").unwrap())
            .collect();
        assert_eq!(ds.max_rating_count_thousands(), 2400.0);
        assert_eq!(Dataset::default().max_rating_count_thousands(), 0.0);
    }
}
