use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    db::{KeyValueStore, StoreKey},
    error::{AppError, AppResult},
    models::{FavoriteMovie, UserPreferences},
};

/// Per-user favorites and preferences, stored as JSON documents.
///
/// Updates are read-modify-write on a whole document, so clones of one
/// service share a write lock. The lock only covers this process: several
/// instances writing the same token through a shared Redis can still lose
/// an update.
#[derive(Clone)]
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list(&self, token: &str) -> AppResult<Vec<FavoriteMovie>> {
        let key = StoreKey::Favorites(token.to_string());
        match self.store.get(&key).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Adds a favorite; adding an ID that is already saved is a no-op
    pub async fn add(&self, token: &str, movie: FavoriteMovie) -> AppResult<Vec<FavoriteMovie>> {
        if movie.imdb_id.trim().is_empty() {
            return Err(AppError::InvalidInput("imdb_id is required".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut favorites = self.list(token).await?;
        if favorites.iter().any(|f| f.imdb_id == movie.imdb_id) {
            tracing::debug!(imdb_id = %movie.imdb_id, "Favorite already saved");
            return Ok(favorites);
        }

        tracing::info!(imdb_id = %movie.imdb_id, store = self.store.name(), "Adding favorite");
        favorites.push(movie);
        self.save_favorites(token, &favorites).await?;
        Ok(favorites)
    }

    pub async fn remove(&self, token: &str, imdb_id: &str) -> AppResult<Vec<FavoriteMovie>> {
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.list(token).await?;
        let before = favorites.len();
        favorites.retain(|f| f.imdb_id != imdb_id);

        if favorites.len() == before {
            return Err(AppError::NotFound(format!("Favorite {} not found", imdb_id)));
        }

        self.save_favorites(token, &favorites).await?;
        Ok(favorites)
    }

    /// Stored preferences, or defaults for a new token
    pub async fn get_preferences(&self, token: &str) -> AppResult<UserPreferences> {
        let key = StoreKey::Preferences(token.to_string());
        match self.store.get(&key).await? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(UserPreferences::new()),
        }
    }

    pub async fn save_preferences(
        &self,
        token: &str,
        preferences: UserPreferences,
    ) -> AppResult<UserPreferences> {
        let preferences = preferences.normalized();
        let key = StoreKey::Preferences(token.to_string());
        let _guard = self.write_lock.lock().await;
        self.store
            .set(&key, serde_json::to_string(&preferences)?)
            .await?;
        Ok(preferences)
    }

    async fn save_favorites(&self, token: &str, favorites: &[FavoriteMovie]) -> AppResult<()> {
        let key = StoreKey::Favorites(token.to_string());
        self.store.set(&key, serde_json::to_string(favorites)?).await
    }
}
