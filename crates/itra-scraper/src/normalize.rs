//! Text normalization shared by the row extractor and the performance-index
//! resolver.

/// Joins the whitespace-separated words of `raw` with single spaces.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first run of ASCII digits in `raw`.
///
/// `"PI: 712 pts"` gives `"712"`, `"712.4"` gives `"712"`, and text without
/// any digit gives `None`.
#[must_use]
pub fn first_digit_run(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].to_owned())
}

/// Returns the last whitespace-delimited token of `raw`.
///
/// Nationality cells often carry a flag glyph or a country label before the
/// code, so `"🇫🇷 France FRA"` gives `"FRA"`.
#[must_use]
pub fn last_token(raw: &str) -> Option<String> {
    raw.split_whitespace().next_back().map(str::to_owned)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
