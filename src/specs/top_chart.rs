// src/specs/top_chart.rs
//
// Row shape of the Top 250 chart table. One <tr> per title:
//
//   <td class="posterColumn">
//     <span name="rk" data-value="1"></span>
//     <span name="ir" data-value="9.236"></span>
//     <span name="us" data-value="7.791552E11"></span>
//     <span name="nv" data-value="2500000"></span>      <- vote count
//     <a href="..."><img ...></a>
//   </td>
//   <td class="titleColumn">
//     1. <a href="..." title="Frank Darabont (dir.), Tim Robbins, ...">Title</a>
//     <span class="secondaryInfo">(1994)</span>
//   </td>
//   <td class="ratingColumn imdbRating"><strong title="...">9.2</strong></td>
//
// The first <tr> of the document is the table header.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{attr, compile, first, text_of};
use crate::core::sanitize::{normalize_ws, parse_decimal};
use crate::data::MovieRecord;
use crate::error::{ExtractionError, Field};

const ROW: &str = "tr";
const TITLE_CELL: &str = "td.titleColumn";
const TITLE_LINK: &str = "td.titleColumn a";
const YEAR_SPAN: &str = "td.titleColumn span.secondaryInfo";
const RATING_CELL: &str = "td.ratingColumn.imdbRating";
const RATING_TEXT: &str = "td.ratingColumn.imdbRating strong";
const POSTER_CELL: &str = "td.posterColumn";
const VOTES_MARKER: &str = "td.posterColumn span";

const CREDIT_ATTR: &str = "title";
const VOTES_ATTR: &str = "data-value";

/// Marker position inside the poster cell on layouts without `name=` tags.
pub const VOTES_MARKER_INDEX: usize = 3;

struct RowSelectors {
    row: Selector,
    title_cell: Selector,
    link: Selector,
    year: Selector,
    rating_cell: Selector,
    strong: Selector,
    poster_cell: Selector,
    span: Selector,
    named_votes: Selector,
}

static SEL: LazyLock<RowSelectors> = LazyLock::new(|| RowSelectors {
    row: compile(ROW),
    title_cell: compile(TITLE_CELL),
    link: compile("a"),
    year: compile("span.secondaryInfo"),
    rating_cell: compile(RATING_CELL),
    strong: compile("strong"),
    poster_cell: compile(POSTER_CELL),
    span: compile("span"),
    named_votes: compile(r#"span[name="nv"]"#),
});

/// One ranked entry's markup, borrowed from the parsed document.
#[derive(Clone, Copy, Debug)]
pub struct RawRow<'a>(ElementRef<'a>);

impl<'a> RawRow<'a> {
    pub fn element(&self) -> ElementRef<'a> {
        self.0
    }
}

/// Every row-like node in document order, header included.
pub fn rows(doc: &Html) -> Vec<RawRow<'_>> {
    doc.select(&SEL.row).map(RawRow).collect()
}

/// Turn one row into a record, or say which part was missing or malformed.
pub fn extract_row(row: RawRow<'_>) -> Result<MovieRecord, ExtractionError> {
    let el = row.element();

    // Title cell: link text = title, link tooltip = lead credit, muted span = year
    let title_cell = first(el, &SEL.title_cell)
        .ok_or(ExtractionError::MissingElement { field: Field::Title, selector: TITLE_CELL })?;
    let link = first(title_cell, &SEL.link)
        .ok_or(ExtractionError::MissingElement { field: Field::Title, selector: TITLE_LINK })?;

    let title = non_empty(Field::Title, text_of(link))?;
    let lead_credit = attr(link, CREDIT_ATTR)
        .ok_or(ExtractionError::MissingAttribute { field: Field::LeadCredit, attr: CREDIT_ATTR })
        .map(normalize_ws)
        .and_then(|s| non_empty(Field::LeadCredit, s))?;

    let year_el = first(title_cell, &SEL.year)
        .ok_or(ExtractionError::MissingElement { field: Field::Year, selector: YEAR_SPAN })?;
    let year = non_empty(Field::Year, text_of(year_el))?;

    // Rating cell: emphasized decimal
    let rating_cell = first(el, &SEL.rating_cell)
        .ok_or(ExtractionError::MissingElement { field: Field::Rating, selector: RATING_CELL })?;
    let rating_el = first(rating_cell, &SEL.strong)
        .ok_or(ExtractionError::MissingElement { field: Field::Rating, selector: RATING_TEXT })?;
    let rating = number(Field::Rating, &text_of(rating_el))?;

    // Poster cell: vote count lives on a marker attribute, not in visible text
    let poster_cell = first(el, &SEL.poster_cell)
        .ok_or(ExtractionError::MissingElement { field: Field::RatingCount, selector: POSTER_CELL })?;
    let marker = votes_marker(poster_cell)
        .ok_or(ExtractionError::MissingElement { field: Field::RatingCount, selector: VOTES_MARKER })?;
    let votes = attr(marker, VOTES_ATTR)
        .ok_or(ExtractionError::MissingAttribute { field: Field::RatingCount, attr: VOTES_ATTR })?;
    let rating_count = number(Field::RatingCount, votes)?;

    MovieRecord::new(title, year, rating, rating_count, lead_credit)
}

/// The `name="nv"` marker if the cell tags its markers, else the one at the fixed position.
fn votes_marker(cell: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if let Some(named) = cell.select(&SEL.named_votes).next() {
        return Some(named);
    }
    // Named layout but no vote marker: report it missing rather than pick a neighbour.
    if cell.select(&SEL.span).any(|s| s.value().attr("name").is_some()) {
        return None;
    }
    cell.select(&SEL.span).nth(VOTES_MARKER_INDEX)
}

fn non_empty(field: Field, s: String) -> Result<String, ExtractionError> {
    if s.is_empty() { Err(ExtractionError::Empty { field }) } else { Ok(s) }
}

fn number(field: Field, text: &str) -> Result<f64, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty { field });
    }
    parse_decimal(text).ok_or_else(|| ExtractionError::NotNumeric { field, text: s!(text.trim()) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ROW: &str = r#"
        <tr>
          <td class="posterColumn">
            <span name="rk" data-value="1"></span>
            <span name="ir" data-value="9.236"></span>
            <span name="us" data-value="7.791552E11"></span>
            <span name="nv" data-value="2500000"></span>
            <a href="/title/tt0111161/"><img src="x.jpg" alt="The Shawshank Redemption"></a>
          </td>
          <td class="titleColumn">
            1.
            <a href="/title/tt0111161/" title="Frank Darabont (dir.), Tim Robbins, Morgan Freeman">The Shawshank Redemption</a>
            <span class="secondaryInfo">(1994)</span>
          </td>
          <td class="ratingColumn imdbRating">
            <strong title="9.2 based on 2,500,000 user ratings">9.2</strong>
          </td>
          <td class="ratingColumn"></td>
          <td class="watchlistColumn"></td>
        </tr>"#;

    fn table(rows: &str) -> Html {
        Html::parse_document(&format!("<table><tbody>{rows}</tbody></table>"))
    }

    fn extract_first(doc: &Html) -> Result<MovieRecord, ExtractionError> {
        let rows = rows(doc);
        extract_row(rows[0])
    }

    #[test]
    fn extracts_all_fields() {
        let doc = table(GOOD_ROW);
        let rec = extract_first(&doc).unwrap();
        assert_eq!(rec.title(), "The Shawshank Redemption");
        assert_eq!(rec.year(), "(1994)");
        assert_eq!(rec.rating(), 9.2);
        assert_eq!(rec.rating_count(), 2_500_000.0);
        assert_eq!(rec.lead_credit(), "Frank Darabont (dir.), Tim Robbins, Morgan Freeman");
    }

    #[test]
    fn year_keeps_annotations_and_brackets() {
        let doc = table(&GOOD_ROW.replace("(1994)", "(2003–2004) "));
        assert_eq!(extract_first(&doc).unwrap().year(), "(2003–2004)");
    }

    #[test]
    fn entities_in_title_are_decoded() {
        let doc = table(&GOOD_ROW.replace("The Shawshank Redemption</a>", "Léon: The Professional &amp; Co</a>"));
        assert_eq!(extract_first(&doc).unwrap().title(), "Léon: The Professional & Co");
    }

    #[test]
    fn missing_title_cell() {
        let doc = table(&GOOD_ROW.replace("titleColumn", "somethingElse"));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingElement { field: Field::Title, selector: TITLE_CELL }
        );
    }

    #[test]
    fn missing_tooltip_is_lead_credit_error() {
        let doc = table(&GOOD_ROW.replace(r#"title="Frank Darabont (dir.), Tim Robbins, Morgan Freeman""#, ""));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingAttribute { field: Field::LeadCredit, attr: "title" }
        );
    }

    #[test]
    fn missing_year_span() {
        let doc = table(&GOOD_ROW.replace("secondaryInfo", "primaryInfo"));
        assert_eq!(extract_first(&doc).unwrap_err().field(), Field::Year);
    }

    #[test]
    fn empty_year_span() {
        let doc = table(&GOOD_ROW.replace("(1994)", "  "));
        assert_eq!(extract_first(&doc).unwrap_err(), ExtractionError::Empty { field: Field::Year });
    }

    #[test]
    fn rating_cell_needs_both_classes() {
        let doc = table(&GOOD_ROW.replace("ratingColumn imdbRating", "ratingColumn"));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingElement { field: Field::Rating, selector: RATING_CELL }
        );
    }

    #[test]
    fn non_numeric_rating() {
        let doc = table(&GOOD_ROW.replace(">9.2</strong>", ">N/A</strong>"));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::NotNumeric { field: Field::Rating, text: s!("N/A") }
        );
    }

    #[test]
    fn implausible_rating_is_out_of_range() {
        let doc = table(&GOOD_ROW.replace(">9.2</strong>", ">92</strong>"));
        assert!(matches!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::OutOfRange { field: Field::Rating, .. }
        ));
    }

    #[test]
    fn vote_marker_without_attribute() {
        let doc = table(&GOOD_ROW.replace(r#"<span name="nv" data-value="2500000">"#, r#"<span name="nv">"#));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingAttribute { field: Field::RatingCount, attr: VOTES_ATTR }
        );
    }

    #[test]
    fn comma_grouped_votes_are_not_numeric() {
        let doc = table(&GOOD_ROW.replace(r#"data-value="2500000""#, r#"data-value="2,500,000""#));
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::NotNumeric { field: Field::RatingCount, text: s!("2,500,000") }
        );
    }

    #[test]
    fn unnamed_markers_fall_back_to_position() {
        let row = GOOD_ROW
            .replace(r#" name="rk""#, "")
            .replace(r#" name="ir""#, "")
            .replace(r#" name="us""#, "")
            .replace(r#" name="nv""#, "");
        let doc = table(&row);
        assert_eq!(extract_first(&doc).unwrap().rating_count(), 2_500_000.0);
    }

    #[test]
    fn unnamed_marker_at_vote_position_without_attribute() {
        let row = GOOD_ROW
            .replace(r#" name="rk""#, "")
            .replace(r#" name="ir""#, "")
            .replace(r#" name="us""#, "")
            .replace(r#"<span name="nv" data-value="2500000">"#, "<span>");
        let doc = table(&row);
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingAttribute { field: Field::RatingCount, attr: "data-value" }
        );
    }

    #[test]
    fn too_few_unnamed_markers() {
        let doc = table(
            r#"<tr>
                <td class="posterColumn"><span data-value="1"></span><span data-value="9.2"></span></td>
                <td class="titleColumn"><a title="Dir">T</a><span class="secondaryInfo">(1999)</span></td>
                <td class="ratingColumn imdbRating"><strong>8.0</strong></td>
            </tr>"#,
        );
        assert_eq!(
            extract_first(&doc).unwrap_err(),
            ExtractionError::MissingElement { field: Field::RatingCount, selector: VOTES_MARKER }
        );
    }

    #[test]
    fn named_layout_without_vote_marker_does_not_guess() {
        let doc = table(&GOOD_ROW.replace(r#"<span name="nv" data-value="2500000"></span>"#, ""));
        assert_eq!(extract_first(&doc).unwrap_err().field(), Field::RatingCount);
    }

    #[test]
    fn header_row_is_not_a_record() {
        let doc = table(r#"<tr><th></th><th>Rank &amp; Title</th><th>IMDb Rating</th></tr>"#);
        assert!(extract_first(&doc).is_err());
    }
}
