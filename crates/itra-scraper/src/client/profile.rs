//! Single-profile performance-index lookup for `ItraClient`.

use itra_core::ProfileLookup;

use crate::error::ScraperError;
use crate::performance::PerformanceReading;
use crate::profile_ref::ProfileRef;

use super::ItraClient;

impl ItraClient {
    /// Looks up one runner's performance index outside the results-table flow.
    ///
    /// Never returns an error: failures are reported through
    /// [`ProfileLookup::success`] and a human-readable
    /// [`ProfileLookup::error`].
    pub async fn extract_performance_index(&self, profile_url: &str) -> ProfileLookup {
        match self.lookup_profile(profile_url).await {
            Ok(reading) => ProfileLookup::found(
                reading.performance_index.or_placeholder(),
                reading.runner_name,
            ),
            Err(e) => {
                tracing::warn!(url = profile_url, error = %e, "profile lookup failed");
                ProfileLookup::failed(e.user_message())
            }
        }
    }

    /// Validates `profile_url` and resolves it.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] for a URL that is neither a profile page
    ///   nor a `GetRunnerSpace` API URL; no request is made.
    /// - Any error from [`ItraClient::resolve_performance_index`].
    pub async fn lookup_profile(
        &self,
        profile_url: &str,
    ) -> Result<PerformanceReading, ScraperError> {
        let reference = ProfileRef::parse_profile_url(profile_url)?;
        tracing::info!(
            url = %reference.url(),
            api = reference.is_api(),
            "looking up performance index"
        );
        self.resolve_performance_index(&reference).await
    }
}
