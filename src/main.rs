use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cinesearch::{
    config::{Config, SearchSettings},
    db::{create_redis_client, KeyValueStore, MemoryStore, RedisStore},
    routes::{create_router, AppState},
    services::providers::{CatalogProvider, OmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let provider: Arc<dyn CatalogProvider> = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
        config.request_timeout(),
    )?);

    let store: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(redis_url) => Arc::new(RedisStore::new(create_redis_client(redis_url)?)),
        None => {
            tracing::warn!("REDIS_URL not set, favorites and preferences are kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    tracing::info!(
        provider = provider.name(),
        store = store.name(),
        "Catalog and store configured"
    );

    let state = AppState::new(provider, store, SearchSettings::from(&config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
