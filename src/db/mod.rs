//! Key-value persistence for per-user data (favorites, preferences).
//!
//! Values are JSON strings. Redis backs the store in deployments; the
//! in-memory store is used when no Redis URL is configured and in tests.

use std::fmt::Display;

use crate::error::AppResult;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::{create_redis_client, RedisStore};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Favorites list for a user token
    Favorites(String),
    /// Saved preferences for a user token
    Preferences(String),
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::Favorites(token) => write!(f, "favorites:{}", token),
            StoreKey::Preferences(token) => write!(f, "prefs:{}", token),
        }
    }
}

/// Minimal string store the favorites service is written against
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &StoreKey) -> AppResult<Option<String>>;

    async fn set(&self, key: &StoreKey, value: String) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_key_display_favorites() {
        let key = StoreKey::Favorites("5f1c".to_string());
        assert_eq!(format!("{}", key), "favorites:5f1c");
    }

    #[test]
    fn test_store_key_display_preferences() {
        let key = StoreKey::Preferences("5f1c".to_string());
        assert_eq!(format!("{}", key), "prefs:5f1c");
    }
}
