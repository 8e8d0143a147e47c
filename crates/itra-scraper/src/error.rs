use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("connection error for {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("results table #{table_id} not found on page")]
    TableNotFound { table_id: String },

    #[error("results table #{table_id} contains no result rows")]
    NoResults { table_id: String },

    #[error("malformed JSON payload from {url}: {source}")]
    MalformedPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("field {field} not found in payload from {url}")]
    FieldNotFound { field: &'static str, url: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl ScraperError {
    /// Short, caller-facing description suitable for a CLI line or an API
    /// error body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ScraperError::InvalidUrl { reason, .. } => format!("Invalid URL: {reason}"),
            ScraperError::Timeout { timeout_secs, .. } => format!(
                "The request timed out after {timeout_secs} seconds. The site may be slow, please try again."
            ),
            ScraperError::Connection { .. } => {
                "Could not connect to the results site. Check your network connection.".to_string()
            }
            ScraperError::HttpStatus { status, .. } => {
                format!("The results site answered with HTTP status {status}.")
            }
            ScraperError::TableNotFound { .. } => {
                "No results table was found on that page. Check that the URL points to a race results page.".to_string()
            }
            ScraperError::NoResults { .. } => {
                "The results table on that page has no runners.".to_string()
            }
            ScraperError::MalformedPayload { .. } => {
                "The profile API returned data that could not be read.".to_string()
            }
            ScraperError::FieldNotFound { .. } => {
                "Performance index not found in the profile data.".to_string()
            }
            ScraperError::Client(e) => format!("HTTP client error: {e}"),
        }
    }

    /// `true` for failures caused by the input rather than by the remote site.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScraperError::InvalidUrl { .. })
    }
}
