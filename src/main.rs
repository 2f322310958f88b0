//! Server: loads config from env (and `.env`), opens the SQLite store, creates tables if
//! absent, serves the resource routes.

use storefront_api::{app, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    let state = AppState { pool };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
