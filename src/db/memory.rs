use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{KeyValueStore, StoreKey};
use crate::error::AppResult;

/// Process-local store used when Redis is not configured; lost on restart
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &StoreKey) -> AppResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(&key.to_string()).cloned())
    }

    async fn set(&self, key: &StoreKey, value: String) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
