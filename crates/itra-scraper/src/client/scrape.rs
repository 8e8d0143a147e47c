//! Race-results scrape for `ItraClient`.

use futures::future::join_all;
use itra_core::{Field, RaceResultRecord};
use reqwest::Url;

use crate::aggregate::parse_results_page;
use crate::error::ScraperError;
use crate::profile_ref::ProfileRef;

use super::{parse_http_url, ItraClient};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

impl ItraClient {
    /// Scrapes the podium of a race-results page.
    ///
    /// Fetches `url` once, locates the results table, extracts up to three
    /// rows, and (when enabled) looks up each runner's performance index. The
    /// profile lookups run concurrently and their results are matched back
    /// to rows by position, so record order is table order.
    ///
    /// **Partial-data semantics**: a field that cannot be read becomes `N/A`
    /// in its record; a failed profile lookup only makes that record's
    /// `performance_index` `N/A`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] before any request for a non-http(s) URL.
    /// - [`ScraperError::Timeout`], [`ScraperError::Connection`],
    ///   [`ScraperError::HttpStatus`] from the page fetch.
    /// - [`ScraperError::TableNotFound`] / [`ScraperError::NoResults`] from
    ///   the fetched page.
    pub async fn scrape_results(&self, url: &str) -> Result<Vec<RaceResultRecord>, ScraperError> {
        let page_url = parse_http_url(url)?;
        tracing::info!(url = %page_url, "scraping race results");

        let body = self.fetch_text(&page_url, ACCEPT_HTML).await?;
        let rows = parse_results_page(&body, &self.settings.results_table_id, &self.site_origin)?;

        let performance = if self.settings.enrich_performance_index {
            join_all(
                rows.iter()
                    .map(|row| self.performance_for_link(row.profile_link.as_deref())),
            )
            .await
        } else {
            vec![Field::Missing; rows.len()]
        };

        let records = rows
            .into_iter()
            .zip(performance)
            .map(|(row, index)| row.into_record(index))
            .collect::<Vec<_>>();

        tracing::info!(url = %page_url, count = records.len(), "scraped race results");
        Ok(records)
    }

    /// Performance index for one results row. Every failure degrades to
    /// [`Field::Missing`].
    async fn performance_for_link(&self, profile_link: Option<&str>) -> Field {
        let Some(link) = profile_link else {
            return Field::Missing;
        };
        let Ok(url) = Url::parse(link) else {
            return Field::Missing;
        };

        match self
            .resolve_performance_index(&ProfileRef::from_url(url))
            .await
        {
            Ok(reading) => reading.performance_index,
            Err(e) => {
                tracing::warn!(
                    profile = link,
                    error = %e,
                    "performance index unavailable; leaving placeholder"
                );
                Field::Missing
            }
        }
    }
}
