//! HTTP API that aggregates Asana project and task data for the
//! music-release dashboard.

pub mod api;
pub mod classify;
pub mod config;
pub mod fetch;
pub mod metrics_defs;
pub mod ordering;
pub mod upcoming;

use crate::api::AppState;
use crate::config::Config;
use tokio::net::TcpListener;

#[derive(thiserror::Error, Debug)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binds the configured listener and serves the dashboard API until the
/// process is terminated.
pub async fn serve(config: Config) -> Result<(), ServeError> {
    let state = AppState::new(&config.asana, config.batch.clone());
    let app = api::router(state);

    let addr = format!("{}:{}", config.listener.host, config.listener.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "dashboard API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
