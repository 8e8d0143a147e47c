//! HTTP client for ITRA race-result pages and runner profiles.

mod origin;
mod profile;
mod scrape;

use std::time::Duration;

use itra_core::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RESULTS_TABLE_ID, DEFAULT_SITE_ORIGIN,
    DEFAULT_USER_AGENT,
};
use reqwest::{Client, Url};

use crate::error::ScraperError;

pub use origin::{parse_http_url, resolve_href};

/// Knobs for [`ItraClient`]. Built from [`itra_core::AppConfig`] in the
/// binaries and by hand in tests.
#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub site_origin: String,
    pub results_table_id: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub enrich_performance_index: bool,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_owned(),
            results_table_id: DEFAULT_RESULTS_TABLE_ID.to_owned(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            enrich_performance_index: true,
        }
    }
}

impl ScraperSettings {
    #[must_use]
    pub fn from_app_config(config: &itra_core::AppConfig) -> Self {
        Self {
            site_origin: config.site_origin.clone(),
            results_table_id: config.results_table_id.clone(),
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            enrich_performance_index: config.enrich_performance_index,
        }
    }
}

/// Client for ITRA results pages and runner profiles.
///
/// Every request is a single GET with the configured `User-Agent` and
/// timeout. There is no retry and no cookie store. Timeouts, connection
/// failures and non-2xx statuses surface as distinct [`ScraperError`]
/// variants.
pub struct ItraClient {
    pub(super) client: Client,
    pub(super) settings: ScraperSettings,
    pub(super) site_origin: Url,
}

impl ItraClient {
    /// Creates an `ItraClient` from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `settings.site_origin` is not an
    /// absolute http(s) URL, or [`ScraperError::Client`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(settings: ScraperSettings) -> Result<Self, ScraperError> {
        let site_origin = parse_http_url(&settings.site_origin)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            settings,
            site_origin,
        })
    }

    /// Performs one GET and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Timeout`] if the request or body read exceeds the timeout.
    /// - [`ScraperError::Connection`] for any other transport failure.
    /// - [`ScraperError::HttpStatus`] for a non-2xx status.
    pub(crate) async fn fetch_text(&self, url: &Url, accept: &str) -> Result<String, ScraperError> {
        tracing::debug!(url = %url, "fetching");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .map_err(|e| self.classify_transport(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.classify_transport(e, url))
    }

    fn classify_transport(&self, err: reqwest::Error, url: &Url) -> ScraperError {
        if err.is_timeout() {
            ScraperError::Timeout {
                url: url.to_string(),
                timeout_secs: self.settings.timeout_secs,
            }
        } else {
            ScraperError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
