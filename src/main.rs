#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use crate::config::HostConfig;
use crate::error::HostError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "forwarding /api requests");

    let state = AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "lead-manager listening");
    axum::serve(listener, app).await?;
    Ok(())
}
