//! Column-layout inference for results-table rows.
//!
//! The first row of a race may carry an extra race-score cell that spans the
//! following rows (`rowspan > 1`). Where that cell is present in a row's DOM,
//! every column from age onwards sits one position further right. The
//! classifier looks at a row once and hands back named indices; the row
//! extractor never uses raw positions.

use scraper::ElementRef;

/// Named field-to-cell mapping for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub position: usize,
    pub name: usize,
    pub time: usize,
    pub age: usize,
    pub gender: usize,
    pub nationality: usize,
}

impl ColumnLayout {
    /// Layout of a row without the merged race-score cell.
    pub const STANDARD: Self = Self {
        position: 0,
        name: 1,
        time: 2,
        age: 3,
        gender: 4,
        nationality: 5,
    };

    /// Layout of a row that carries the merged race-score cell at index 3.
    pub const WITH_RACE_SCORE: Self = Self {
        position: 0,
        name: 1,
        time: 2,
        age: 4,
        gender: 5,
        nationality: 6,
    };

    /// Picks the layout for a row from the `rowspan` attribute of each of its
    /// cells, in order.
    #[must_use]
    pub fn from_rowspans<'a, I>(rowspans: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if rowspans.into_iter().any(spans_multiple_rows) {
            Self::WITH_RACE_SCORE
        } else {
            Self::STANDARD
        }
    }

    /// Picks the layout for a row from its cell elements.
    #[must_use]
    pub fn classify(cells: &[ElementRef<'_>]) -> Self {
        Self::from_rowspans(cells.iter().map(|cell| cell.value().attr("rowspan")))
    }
}

/// `rowspan="1"`, blank, and non-numeric values do not count as merged.
fn spans_multiple_rows(rowspan: Option<&str>) -> bool {
    rowspan
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .is_some_and(|n| n > 1)
}
