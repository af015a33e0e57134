use clap::Parser;
use metrics_exporter_statsd::StatsdBuilder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
use config::{Config, ConfigError, MetricsConfig};

#[derive(Parser)]
#[command(name = "encore", about = "Release dashboard backend")]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
enum StartupError {
    #[error("could not load config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid config: {0}")]
    Validation(#[from] dashboard::config::ValidationError),
    #[error("could not install metrics exporter: {0}")]
    Metrics(String),
    #[error(transparent)]
    Serve(#[from] dashboard::ServeError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.dashboard.asana.merge_env();
    config.dashboard.validate()?;

    if let Some(metrics) = &config.metrics {
        install_statsd(metrics)?;
    }

    if config.dashboard.asana.credentials().is_none() {
        tracing::warn!("Asana credentials not configured; every request will be answered 500");
    }

    dashboard::serve(config.dashboard).await?;

    Ok(())
}

fn install_statsd(config: &MetricsConfig) -> Result<(), StartupError> {
    let recorder = StatsdBuilder::from(config.statsd_host.as_str(), config.statsd_port)
        .build(Some("encore"))
        .map_err(|e| StartupError::Metrics(e.to_string()))?;

    metrics::set_global_recorder(recorder).map_err(|e| StartupError::Metrics(e.to_string()))?;

    Ok(())
}
