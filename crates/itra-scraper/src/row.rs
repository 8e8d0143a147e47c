//! Per-row field extraction.
//!
//! Each field is read on its own: a missing cell or a missing anchor only
//! makes that field [`Field::Missing`]. A row never fails as a whole.

use std::sync::LazyLock;

use itra_core::{Field, RaceResultRecord};
use reqwest::Url;
use scraper::{ElementRef, Selector};

use crate::client::resolve_href;
use crate::layout::ColumnLayout;
use crate::normalize::{collapse_whitespace, last_token};
use crate::table::row_cells;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid anchor selector"));

/// Fields pulled from one results row, before performance-index enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedRow {
    pub position: Field,
    pub name: Field,
    pub profile_link: Field,
    pub time: Field,
    pub age: Field,
    pub gender: Field,
    pub nationality: Field,
}

impl ExtractedRow {
    /// `true` when no field could be read. Such rows are still kept.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        ![
            &self.position,
            &self.name,
            &self.profile_link,
            &self.time,
            &self.age,
            &self.gender,
            &self.nationality,
        ]
        .into_iter()
        .any(Field::is_present)
    }

    /// Builds the caller-facing record; this is where `Missing` turns into
    /// the placeholder.
    #[must_use]
    pub fn into_record(self, performance_index: Field) -> RaceResultRecord {
        RaceResultRecord {
            position: self.position.or_placeholder(),
            name: self.name.or_placeholder(),
            profile_link: self.profile_link.or_placeholder(),
            time: self.time.or_placeholder(),
            performance_index: performance_index.or_placeholder(),
            age: self.age.or_placeholder(),
            gender: self.gender.or_placeholder(),
            nationality: self.nationality.or_placeholder(),
        }
    }
}

/// Extracts one results row. Relative profile hrefs are joined onto `origin`.
#[must_use]
pub fn extract_row(row: ElementRef<'_>, origin: &Url) -> ExtractedRow {
    let cells = row_cells(row);
    let layout = ColumnLayout::classify(&cells);
    let cell = |index: usize| cells.get(index).copied();

    let (name, profile_link) = cell(layout.name).map_or((Field::Missing, Field::Missing), |c| {
        extract_runner_link(c, origin)
    });

    ExtractedRow {
        position: cell(layout.position).map_or(Field::Missing, cell_text),
        name,
        profile_link,
        time: cell(layout.time).map_or(Field::Missing, cell_text),
        age: cell(layout.age).map_or(Field::Missing, cell_text),
        gender: cell(layout.gender).map_or(Field::Missing, cell_text),
        nationality: cell(layout.nationality)
            .and_then(|c| last_token(&text_pieces(c)))
            .into(),
    }
}

/// Name and profile link from the first anchor of the runner cell.
///
/// No anchor means neither value is available, even if the cell has text.
/// An anchor without a usable `href` still yields the name.
fn extract_runner_link(cell: ElementRef<'_>, origin: &Url) -> (Field, Field) {
    let Some(anchor) = cell.select(&ANCHOR).next() else {
        return (Field::Missing, Field::Missing);
    };

    let name = cell_text(anchor);
    let link: Field = anchor
        .value()
        .attr("href")
        .and_then(|href| resolve_href(origin, href))
        .map(String::from)
        .into();

    (name, link)
}

fn cell_text(el: ElementRef<'_>) -> Field {
    Field::from_text(&collapse_whitespace(&el.text().collect::<String>()))
}

/// Text nodes joined with a space, so a flag glyph in its own element stays
/// a separate token from the country code that follows it.
fn text_pieces(el: ElementRef<'_>) -> String {
    el.text().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
