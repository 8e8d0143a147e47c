use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_SITE_ORIGIN: &str = "https://itra.run";
pub const DEFAULT_RESULTS_TABLE_ID: &str = "RunnerRaceResults";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config pointed at the public ITRA site.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("ITRA_ENV", "development"))?;

    let bind_addr = or_default("ITRA_BIND_ADDR", "127.0.0.1:5000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("ITRA_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("ITRA_LOG_LEVEL", "info");

    let site_origin = or_default("ITRA_SITE_ORIGIN", DEFAULT_SITE_ORIGIN);
    if !(site_origin.starts_with("http://") || site_origin.starts_with("https://")) {
        return Err(invalid(
            "ITRA_SITE_ORIGIN",
            format!("\"{site_origin}\" must start with http:// or https://"),
        ));
    }
    let site_origin = site_origin.trim_end_matches('/').to_string();

    let results_table_id = or_default("ITRA_RESULTS_TABLE_ID", DEFAULT_RESULTS_TABLE_ID);
    if results_table_id.trim().is_empty() || results_table_id.contains(char::is_whitespace) {
        return Err(invalid(
            "ITRA_RESULTS_TABLE_ID",
            "must be a single non-empty element id".to_string(),
        ));
    }

    let request_timeout_secs = lookup("ITRA_REQUEST_TIMEOUT_SECS")
        .map_or(Ok(DEFAULT_REQUEST_TIMEOUT_SECS), |raw| raw.parse::<u64>())
        .map_err(|e| invalid("ITRA_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "ITRA_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("ITRA_USER_AGENT", DEFAULT_USER_AGENT);

    let enrich_performance_index = parse_bool(
        "ITRA_ENRICH_PERFORMANCE_INDEX",
        &or_default("ITRA_ENRICH_PERFORMANCE_INDEX", "true"),
    )?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        site_origin,
        results_table_id,
        request_timeout_secs,
        user_agent,
        enrich_performance_index,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ITRA_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
