use anyhow::Result;
use store_api::config::ServiceConfig;
use store_api::server::ServerBuilder;
use store_api::storage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        backend = ?config.storage.backend,
        bind_address = %config.server.bind_address,
        "Starting store-api"
    );

    let repository = storage::connect(&config.storage).await?;

    ServerBuilder::new()
        .with_repository(repository)
        .with_cors_origins(config.server.cors_allowed_origins.clone())
        .serve(&config.server.bind_address)
        .await
}
