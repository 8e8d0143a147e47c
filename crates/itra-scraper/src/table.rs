//! Results-table location and candidate-row selection.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

/// Only the podium is ever extracted.
pub const TOP_ROWS: usize = 3;

static WITH_ID: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("valid id selector"));
static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));

/// Finds the results table by element id.
///
/// Class names on the results page have changed between site revisions, the
/// id has not. When the id sits on a wrapper rather than on the `<table>`
/// itself, the first table inside the wrapper is used.
///
/// # Errors
///
/// Returns [`ScraperError::TableNotFound`] when no element carries `table_id`
/// or the element with that id contains no table.
pub fn locate_table<'a>(document: &'a Html, table_id: &str) -> Result<ElementRef<'a>, ScraperError> {
    let not_found = || ScraperError::TableNotFound {
        table_id: table_id.to_owned(),
    };

    let anchor = document
        .select(&WITH_ID)
        .find(|el| el.value().id() == Some(table_id))
        .ok_or_else(not_found)?;

    if anchor.value().name() == "table" {
        return Ok(anchor);
    }
    anchor.select(&TABLE).next().ok_or_else(not_found)
}

/// Returns the first `limit` data rows of `table`.
///
/// The table's first `<tr>` is the header whatever its cells are (`<th>` or
/// `<td>`, in `<thead>` or the first body row) and is always skipped. After
/// it, a data row is a `<tr>` with at least one `<td>` child.
#[must_use]
pub fn data_rows<'a>(table: ElementRef<'a>, limit: usize) -> Vec<ElementRef<'a>> {
    table
        .select(&ROW)
        .skip(1)
        .filter(|row| row_cells(*row).iter().any(|c| c.value().name() == "td"))
        .take(limit)
        .collect()
}

/// Direct `<td>`/`<th>` children of a row, in document order.
#[must_use]
pub fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table class="results-table" id="RunnerRaceResults">
            <thead><tr><th>Rank</th><th>Runner</th><th>Time</th></tr></thead>
            <tbody>
              <tr><td>1</td><td>A</td><td>10:00:00</td></tr>
              <tr><td>2</td><td>B</td><td>10:10:00</td></tr>
              <tr><td>3</td><td>C</td><td>10:20:00</td></tr>
              <tr><td>4</td><td>D</td><td>10:30:00</td></tr>
            </tbody>
          </table>
        </body></html>
    "#;

    #[test]
    fn locates_table_by_id() {
        let doc = Html::parse_document(PAGE);
        let table = locate_table(&doc, "RunnerRaceResults").expect("table");
        assert_eq!(table.value().name(), "table");
    }

    #[test]
    fn class_name_alone_is_not_enough() {
        let doc = Html::parse_document(r#"<table class="RunnerRaceResults"><tr><td>1</td></tr></table>"#);
        let err = locate_table(&doc, "RunnerRaceResults").unwrap_err();
        assert!(
            matches!(err, ScraperError::TableNotFound { ref table_id } if table_id == "RunnerRaceResults"),
            "expected TableNotFound, got: {err:?}"
        );
    }

    #[test]
    fn id_on_wrapper_uses_inner_table() {
        let doc = Html::parse_document(
            r#"<div id="RunnerRaceResults"><table><tr><td>1</td></tr></table></div>"#,
        );
        let table = locate_table(&doc, "RunnerRaceResults").expect("table");
        assert_eq!(table.value().name(), "table");
    }

    #[test]
    fn wrapper_without_table_is_not_found() {
        let doc = Html::parse_document(r#"<div id="RunnerRaceResults">Loading…</div>"#);
        assert!(locate_table(&doc, "RunnerRaceResults").is_err());
    }

    #[test]
    fn takes_first_three_data_rows_after_header() {
        let doc = Html::parse_document(PAGE);
        let table = locate_table(&doc, "RunnerRaceResults").unwrap();
        let rows = data_rows(table, TOP_ROWS);
        assert_eq!(rows.len(), 3);
        let first = row_cells(rows[0]);
        assert_eq!(first[0].text().collect::<String>(), "1");
        let last = row_cells(rows[2]);
        assert_eq!(last[0].text().collect::<String>(), "3");
    }

    #[test]
    fn header_row_inside_tbody_is_skipped() {
        let doc = Html::parse_document(
            r#"<table id="t"><tr><th>Rank</th></tr><tr><td>1</td></tr><tr><td>2</td></tr></table>"#,
        );
        let table = locate_table(&doc, "t").unwrap();
        assert_eq!(data_rows(table, TOP_ROWS).len(), 2);
    }

    #[test]
    fn td_header_row_is_skipped() {
        let doc = Html::parse_document(
            r#"<table id="t">
                 <tr><td>Rank</td><td>Runner</td><td>Time</td></tr>
                 <tr><td>1</td><td>A</td><td>10:00:00</td></tr>
                 <tr><td>2</td><td>B</td><td>10:10:00</td></tr>
                 <tr><td>3</td><td>C</td><td>10:20:00</td></tr>
               </table>"#,
        );
        let table = locate_table(&doc, "t").unwrap();
        let rows = data_rows(table, TOP_ROWS);
        let ranks: Vec<String> = rows
            .iter()
            .map(|row| row_cells(*row)[0].text().collect())
            .collect();
        assert_eq!(ranks, ["1", "2", "3"]);
    }

    #[test]
    fn empty_table_has_no_rows() {
        let doc = Html::parse_document(r#"<table id="t"><tr><th>Rank</th></tr></table>"#);
        let table = locate_table(&doc, "t").unwrap();
        assert!(data_rows(table, TOP_ROWS).is_empty());
    }
}
