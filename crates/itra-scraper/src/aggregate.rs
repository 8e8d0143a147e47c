//! Result aggregation: rank order in, rank order out, never empty.

use reqwest::Url;
use scraper::Html;

use crate::error::ScraperError;
use crate::row::{extract_row, ExtractedRow};
use crate::table::{data_rows, locate_table, TOP_ROWS};

/// Keeps rows in table order and rejects an empty set.
///
/// Rows whose every field is missing still count; only an empty candidate set
/// is a failure.
///
/// # Errors
///
/// Returns [`ScraperError::NoResults`] when `rows` is empty.
pub fn aggregate<T>(rows: Vec<T>, table_id: &str) -> Result<Vec<T>, ScraperError> {
    if rows.is_empty() {
        return Err(ScraperError::NoResults {
            table_id: table_id.to_owned(),
        });
    }
    Ok(rows)
}

/// Parses a results page and extracts the top rows of its results table.
///
/// Runs synchronously so the parsed document is dropped before any further
/// `.await`.
///
/// # Errors
///
/// - [`ScraperError::TableNotFound`] if no element carries `table_id`.
/// - [`ScraperError::NoResults`] if the table has no data rows.
pub fn parse_results_page(
    body: &str,
    table_id: &str,
    origin: &Url,
) -> Result<Vec<ExtractedRow>, ScraperError> {
    let document = Html::parse_document(body);
    let table = locate_table(&document, table_id)?;

    let rows = data_rows(table, TOP_ROWS)
        .into_iter()
        .map(|row| extract_row(row, origin))
        .collect::<Vec<_>>();

    for (rank, row) in rows.iter().enumerate() {
        if row.is_blank() {
            tracing::warn!(row = rank + 1, table_id, "results row yielded no fields");
        }
    }

    aggregate(rows, table_id)
}
