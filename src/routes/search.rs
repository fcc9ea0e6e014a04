use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::UserToken,
    models::{SearchIntent, UserPreferences},
    services::{
        classifier,
        title_search::{routed_search, SearchMode, SearchOutcome},
    },
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
    #[serde(default)]
    mode: SearchMode,
}

#[derive(Debug, Deserialize)]
pub struct IntentQuery {
    q: String,
}

/// Routed search; smart searches are personalized with the caller's stored preferences
pub async fn search(
    State(state): State<AppState>,
    token: UserToken,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchOutcome>> {
    let preferences = match state.favorites.get_preferences(&token.as_str()).await {
        Ok(preferences) => preferences,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load preferences, searching without them");
            UserPreferences::new()
        }
    };

    let outcome = routed_search(
        &state.orchestrator,
        state.provider.clone(),
        &params.q,
        params.mode,
        |intent| intent.with_preferences(&preferences),
    )
    .await?;

    Ok(Json(outcome))
}

/// Classifier output only, no catalog calls
pub async fn intent(Query(params): Query<IntentQuery>) -> AppResult<Json<SearchIntent>> {
    if params.q.trim().is_empty() {
        return Err(AppError::InvalidInput("Query cannot be empty".to_string()));
    }
    Ok(Json(classifier::classify(&params.q)))
}
