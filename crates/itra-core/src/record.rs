//! Race-result record model shared by the scraper, the CLI and the server.
//!
//! Every record carries all eight keys. Data that could not be extracted is
//! the literal [`PLACEHOLDER`], never an absent key and never an empty string.

use serde::{Deserialize, Serialize};

/// Sentinel value for "not available".
pub const PLACEHOLDER: &str = "N/A";

/// Runner display name used when a profile exposes no name.
pub const UNKNOWN_RUNNER: &str = "Unknown Runner";

/// Outcome of reading one field during extraction.
///
/// Extraction code works with `Field` so that "no such cell" stays distinct
/// from any real value until a [`RaceResultRecord`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field {
    Present(String),
    #[default]
    Missing,
}

impl Field {
    /// Builds a field from raw cell text. Whitespace is trimmed; text that is
    /// empty after trimming counts as missing.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Field::Missing
        } else {
            Field::Present(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Field::Present(v) => Some(v),
            Field::Missing => None,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Field::Present(v) => Some(v),
            Field::Missing => None,
        }
    }

    /// The one place `Missing` becomes the placeholder string.
    #[must_use]
    pub fn or_placeholder(self) -> String {
        match self {
            Field::Present(v) => v,
            Field::Missing => PLACEHOLDER.to_string(),
        }
    }
}

impl From<Option<String>> for Field {
    fn from(value: Option<String>) -> Self {
        value.map_or(Field::Missing, Field::Present)
    }
}

/// One ranked runner from a race-results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResultRecord {
    pub position: String,
    pub name: String,
    pub profile_link: String,
    pub time: String,
    pub performance_index: String,
    pub age: String,
    pub gender: String,
    pub nationality: String,
}

impl RaceResultRecord {
    /// Finish time in seconds, or `None` when the time is the placeholder or
    /// not of the form `H:MM:SS` / `MM:SS`.
    #[must_use]
    pub fn time_seconds(&self) -> Option<u32> {
        if self.time == PLACEHOLDER {
            return None;
        }
        let parts = self
            .time
            .split(':')
            .map(|p| p.trim().parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;
        match parts.as_slice() {
            [h, m, s] if *m < 60 && *s < 60 => h.checked_mul(3600)?.checked_add(m * 60 + s),
            [m, s] if *s < 60 => m.checked_mul(60)?.checked_add(*s),
            _ => None,
        }
    }

    /// Numeric performance index, or `None` for the placeholder.
    #[must_use]
    pub fn performance_index_value(&self) -> Option<u32> {
        if self.performance_index == PLACEHOLDER {
            return None;
        }
        self.performance_index.parse().ok()
    }
}

/// Result of a single-profile performance-index lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLookup {
    pub success: bool,
    pub error: Option<String>,
    pub performance_index: String,
    pub runner_name: String,
}

impl ProfileLookup {
    #[must_use]
    pub fn found(performance_index: String, runner_name: String) -> Self {
        Self {
            success: true,
            error: None,
            performance_index,
            runner_name,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            performance_index: PLACEHOLDER.to_string(),
            runner_name: UNKNOWN_RUNNER.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
