//! `profile` command: single-runner performance-index lookup.

use itra_core::{AppConfig, ProfileLookup};
use itra_scraper::{ItraClient, ScraperSettings};

use crate::OutputFormat;

/// Look up `url` and print the result.
///
/// In JSON mode the lookup is printed as-is, failure included, and the
/// command still exits non-zero on failure.
///
/// # Errors
///
/// Returns an error with the lookup's message when `success` is false.
pub(crate) async fn run_profile(
    config: &AppConfig,
    url: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = ItraClient::new(ScraperSettings::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("failed to build ITRA client: {e}"))?;

    let lookup = client.extract_performance_index(url).await;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lookup)?),
        OutputFormat::Table if lookup.success => print!("{}", render_profile(&lookup)),
        OutputFormat::Table => {}
    }

    if !lookup.success {
        anyhow::bail!(
            "{}",
            lookup.error.as_deref().unwrap_or("profile lookup failed")
        );
    }
    Ok(())
}

pub(crate) fn render_profile(lookup: &ProfileLookup) -> String {
    format!(
        "Runner: {}\nPerformance index: {}\n",
        lookup.runner_name, lookup.performance_index
    )
}
