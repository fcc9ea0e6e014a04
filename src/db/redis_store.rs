use redis::AsyncCommands;
use redis::Client;

use super::{KeyValueStore, StoreKey};
use crate::error::AppResult;

/// Creates a Redis client for the key-value store
///
/// Opening a client does not connect; the first command does.
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed store; values persist without expiry
#[derive(Clone)]
pub struct RedisStore {
    redis_client: Client,
}

impl RedisStore {
    pub fn new(redis_client: Client) -> Self {
        Self { redis_client }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &StoreKey) -> AppResult<Option<String>> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key.to_string()).await?;
        Ok(value)
    }

    async fn set(&self, key: &StoreKey, value: String) -> AppResult<()> {
        let mut conn = self.redis_client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key.to_string(), value).await?;
        tracing::debug!(key = %key, "Stored value in Redis");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
