//! `results` command: scrape a race-results page and print the podium.

use itra_core::{AppConfig, RaceResultRecord};
use itra_scraper::{ItraClient, ScraperSettings};

use crate::OutputFormat;

/// Scrape `url` and print its records in `format`.
///
/// # Errors
///
/// Returns an error carrying the scraper's user-facing message if the page
/// cannot be fetched, has no results table, or the table has no rows.
pub(crate) async fn run_results(
    config: &AppConfig,
    url: &str,
    no_enrich: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut settings = ScraperSettings::from_app_config(config);
    if no_enrich {
        settings.enrich_performance_index = false;
    }

    let client = ItraClient::new(settings)
        .map_err(|e| anyhow::anyhow!("failed to build ITRA client: {e}"))?;

    let records = client.scrape_results(url).await.map_err(|e| {
        tracing::debug!(error = %e, "scrape failed");
        anyhow::anyhow!(e.user_message())
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Table => print!("{}", render_results_table(&records)),
    }

    Ok(())
}

/// Fixed-width table, one line per record, profile link last so it can run
/// past the terminal edge without shifting other columns.
pub(crate) fn render_results_table(records: &[RaceResultRecord]) -> String {
    let mut out = format!(
        "{:<6}{:<28}{:<11}{:<6}{:<6}{:<5}{:<5}PROFILE\n",
        "RANK", "NAME", "TIME", "PI", "AGE", "SEX", "NAT"
    );
    for record in records {
        out.push_str(&format!(
            "{:<6}{:<28}{:<11}{:<6}{:<6}{:<5}{:<5}{}\n",
            record.position,
            truncate(&record.name, 27),
            record.time,
            record.performance_index,
            record.age,
            record.gender,
            record.nationality,
            record.profile_link,
        ));
    }
    out
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        format!(
            "{}...",
            value
                .chars()
                .take(max_chars.saturating_sub(3))
                .collect::<String>()
        )
    }
}
