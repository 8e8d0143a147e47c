//! Runner profile references and the two lookup strategies they select.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::client::parse_http_url;
use crate::error::ScraperError;

const API_PATH: &str = "/api/RunnerSpace/GetRunnerSpace";

static PROFILE_PAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?[A-Za-z0-9.-]+(?::\d+)?/RunnerSpace/[^/?#\s]+/\d+/?$")
        .expect("valid profile page regex")
});
static PROFILE_API_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?[A-Za-z0-9.-]+(?::\d+)?/api/RunnerSpace/GetRunnerSpace\?memberString=[^&#\s]+$",
    )
    .expect("valid profile api regex")
});

/// Where a runner's performance index lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileRef {
    /// `GetRunnerSpace` JSON endpoint.
    Api(Url),
    /// Public `RunnerSpace/<handle>/<id>` HTML page.
    Page(Url),
}

impl ProfileRef {
    /// Tags a profile URL taken from a results page. Anything that is not the
    /// API endpoint is treated as an HTML profile page.
    #[must_use]
    pub fn from_url(url: Url) -> Self {
        if url.path().eq_ignore_ascii_case(API_PATH) {
            ProfileRef::Api(url)
        } else {
            ProfileRef::Page(url)
        }
    }

    /// Validates a user-supplied single-profile URL.
    ///
    /// Accepted shapes:
    /// - `https://itra.run/RunnerSpace/Hoover.Beau/5249134`
    /// - `https://itra.run/api/RunnerSpace/GetRunnerSpace?memberString=<token>`
    ///
    /// Either may use `http`, a `www.` host, or an explicit port.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] for any other shape. No request is made.
    pub fn parse_profile_url(raw: &str) -> Result<Self, ScraperError> {
        let url = parse_http_url(raw)?;
        // Scheme and host are lowercased once parsed.
        let normalized = url.as_str();

        if PROFILE_API_RE.is_match(normalized) {
            Ok(ProfileRef::Api(url))
        } else if PROFILE_PAGE_RE.is_match(normalized) {
            Ok(ProfileRef::Page(url))
        } else {
            Err(ScraperError::InvalidUrl {
                url: raw.to_owned(),
                reason: "expected a RunnerSpace/<name>/<id> profile URL or a \
                         GetRunnerSpace?memberString=... API URL"
                    .to_owned(),
            })
        }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        match self {
            ProfileRef::Api(url) | ProfileRef::Page(url) => url,
        }
    }

    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, ProfileRef::Api(_))
    }
}
