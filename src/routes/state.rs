use std::sync::Arc;

use crate::{
    config::SearchSettings,
    db::KeyValueStore,
    services::{favorites::FavoritesService, providers::CatalogProvider, search::SearchOrchestrator},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub orchestrator: Arc<SearchOrchestrator>,
    pub favorites: FavoritesService,
}

impl AppState {
    /// Wires the orchestrator and favorites service around one provider and store
    pub fn new(
        provider: Arc<dyn CatalogProvider>,
        store: Arc<dyn KeyValueStore>,
        settings: SearchSettings,
    ) -> Self {
        let orchestrator = Arc::new(SearchOrchestrator::new(Arc::clone(&provider), settings));
        Self {
            provider,
            orchestrator,
            favorites: FavoritesService::new(store),
        }
    }
}
