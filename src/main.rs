//! The todo API's web server.

use std::sync::Arc;

use anyhow::Context;
use todo_api::{store::PgStore, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// # Errors
///
/// Fails before serving anything if the configuration is incomplete or the database can't be
/// reached.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");

    let store = PgStore::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let listener = TcpListener::bind(&config.address).await?;

    tracing::info!(
        address = %config.address,
        client_origin = ?config.client_origin,
        "Ready!"
    );

    axum::serve(listener, todo_api::app(Arc::new(store), config.client_origin)).await?;

    Ok(())
}
