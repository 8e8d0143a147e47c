//! `GetRunnerSpace` JSON payload reader.
//!
//! ## Observed shape
//!
//! ```json
//! { "runnerSpace": { "performanceIndex": 712, "fullName": "A. Runner", ... } }
//! ```
//!
//! `performanceIndex` has been seen both as a JSON number and as a numeric
//! string; it is `null` for runners without a rating.

use itra_core::{Field, UNKNOWN_RUNNER};
use serde::Deserialize;
use serde_json::Value;

use super::PerformanceReading;
use crate::error::ScraperError;
use crate::normalize::first_digit_run;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunnerSpaceEnvelope {
    #[serde(default)]
    runner_space: Option<RunnerSpace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunnerSpace {
    #[serde(default)]
    performance_index: Option<Value>,
    #[serde(default)]
    full_name: Option<String>,
}

/// Reads the performance index and runner name from a `GetRunnerSpace` body.
///
/// A present but non-numeric index resolves to [`Field::Missing`] rather than
/// an error.
///
/// # Errors
///
/// - [`ScraperError::MalformedPayload`] if `body` is not JSON of the expected shape.
/// - [`ScraperError::FieldNotFound`] if `runnerSpace.performanceIndex` is absent or `null`.
pub fn parse_runner_space(body: &str, url: &str) -> Result<PerformanceReading, ScraperError> {
    let envelope: RunnerSpaceEnvelope =
        serde_json::from_str(body).map_err(|e| ScraperError::MalformedPayload {
            url: url.to_owned(),
            source: e,
        })?;

    let runner = envelope
        .runner_space
        .ok_or_else(|| ScraperError::FieldNotFound {
            field: "runnerSpace",
            url: url.to_owned(),
        })?;

    let raw_index = runner
        .performance_index
        .filter(|v| !v.is_null())
        .ok_or_else(|| ScraperError::FieldNotFound {
            field: "runnerSpace.performanceIndex",
            url: url.to_owned(),
        })?;

    let runner_name = runner
        .full_name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_RUNNER.to_owned());

    Ok(PerformanceReading {
        performance_index: json_digits(&raw_index),
        runner_name,
    })
}

/// First digit run of a JSON number or string.
pub(super) fn json_digits(value: &Value) -> Field {
    match value {
        Value::Number(n) => first_digit_run(&n.to_string()).into(),
        Value::String(s) => first_digit_run(s).into(),
        _ => Field::Missing,
    }
}
