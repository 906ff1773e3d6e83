use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use griefworks_application::GriefWorks;
use griefworks_core::api::GriefApi;
use griefworks_infrastructure::{ConfigService, SessionStore};
use griefworks_interaction::HttpGriefApi;

mod commands;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "griefworks")]
#[command(about = "Grief Works - guided grief support in the terminal", long_about = None)]
struct Cli {
    /// Backend base URL, e.g. http://localhost:8000/api/v1
    #[arg(long)]
    base_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show per-attempt debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "griefworks=debug"
    } else {
        "griefworks=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = service.load().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }
    let policy = config
        .retry_policy()
        .context("Invalid retry settings")?;

    tracing::info!(base_url = %config.api_base_url, "Starting Grief Works");

    let api: Arc<dyn GriefApi> = Arc::new(HttpGriefApi::from_config(&config));
    let app = GriefWorks::new(SessionStore::in_memory(), api, policy);

    repl::run(&app).await
}
