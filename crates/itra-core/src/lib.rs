mod app_config;
mod config;
mod record;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{
    load_app_config, load_app_config_from_env, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RESULTS_TABLE_ID, DEFAULT_SITE_ORIGIN, DEFAULT_USER_AGENT,
};
pub use record::{Field, ProfileLookup, RaceResultRecord, PLACEHOLDER, UNKNOWN_RUNNER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
