mod profile;
mod results;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "itra-cli")]
#[command(about = "Podium and performance-index lookups against ITRA results pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the top three finishers of a race-results page
    Results {
        /// Race results page URL
        url: String,
        /// Skip per-runner performance-index lookups
        #[arg(long)]
        no_enrich: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Look up one runner's performance index
    Profile {
        /// `RunnerSpace` profile URL or `GetRunnerSpace` API URL
        url: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = itra_core::load_app_config()?;

    // Logs go to stderr so `--format json` output stays machine-readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Results {
            url,
            no_enrich,
            format,
        } => results::run_results(&config, &url, no_enrich, format).await,
        Commands::Profile { url, format } => profile::run_profile(&config, &url, format).await,
    }
}
