//! Extraction engine for ITRA race-result pages and runner profiles.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod performance;
pub mod profile_ref;
pub mod row;
pub mod table;

pub use aggregate::{aggregate, parse_results_page};
pub use client::{ItraClient, ScraperSettings};
pub use error::ScraperError;
pub use layout::ColumnLayout;
pub use performance::{parse_profile_page, parse_runner_space, PerformanceReading};
pub use profile_ref::ProfileRef;
pub use row::{extract_row, ExtractedRow};
