use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin that relative profile hrefs on the results page are joined against.
    pub site_origin: String,
    /// `id` attribute of the results `<table>`.
    pub results_table_id: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Whether `scrape_results` follows each runner's profile link.
    pub enrich_performance_index: bool,
}
