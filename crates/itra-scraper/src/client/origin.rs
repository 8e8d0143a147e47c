//! Input URL validation and href resolution against the site origin.

use reqwest::Url;

use crate::error::ScraperError;

/// Parses a caller-supplied URL, accepting only absolute `http`/`https` URLs
/// with a host. Runs before any network I/O.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] for empty input, unparseable input,
/// any other scheme, or a missing host.
pub fn parse_http_url(raw: &str) -> Result<Url, ScraperError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: reason.to_owned(),
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("URL must start with http:// or https://"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }

    Ok(url)
}

/// Joins an `href` from the results page onto the site origin.
///
/// Absolute hrefs are kept as they are. Returns `None` for blank hrefs,
/// fragment-only links, and anything that does not resolve to `http`/`https`
/// (e.g. `javascript:` or `mailto:` links).
#[must_use]
pub fn resolve_href(origin: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let joined = origin.join(href).ok()?;
    matches!(joined.scheme(), "http" | "https").then_some(joined)
}
