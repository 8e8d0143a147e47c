//! Performance-index resolution for one runner.
//!
//! [`ProfileRef::Api`] references are read from the `GetRunnerSpace` JSON
//! payload; [`ProfileRef::Page`] references go through the HTML selector
//! chain in [`html`].

mod api;
mod html;

use itra_core::Field;

use crate::client::ItraClient;
use crate::error::ScraperError;
use crate::profile_ref::ProfileRef;

pub use api::parse_runner_space;
pub use html::parse_profile_page;

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Performance index and display name read from one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceReading {
    pub performance_index: Field,
    pub runner_name: String,
}

impl ItraClient {
    /// Fetches `reference` and reads the runner's performance index.
    ///
    /// # Errors
    ///
    /// - Transport errors from the single GET ([`ScraperError::Timeout`],
    ///   [`ScraperError::Connection`], [`ScraperError::HttpStatus`]).
    /// - [`ScraperError::MalformedPayload`] / [`ScraperError::FieldNotFound`]
    ///   from the API strategy. The HTML strategy never fails after a
    ///   successful fetch.
    pub async fn resolve_performance_index(
        &self,
        reference: &ProfileRef,
    ) -> Result<PerformanceReading, ScraperError> {
        match reference {
            ProfileRef::Api(url) => {
                let body = self.fetch_text(url, ACCEPT_JSON).await?;
                parse_runner_space(&body, url.as_str())
            }
            ProfileRef::Page(url) => {
                let body = self.fetch_text(url, ACCEPT_HTML).await?;
                Ok(parse_profile_page(&body))
            }
        }
    }
}
