use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{CatalogDetails, SoundtrackLinks, WatchOptions},
    services::media_links,
};

use super::AppState;

async fn fetch_details(state: &AppState, imdb_id: &str) -> AppResult<CatalogDetails> {
    let imdb_id = imdb_id.trim();
    if imdb_id.is_empty() {
        return Err(AppError::InvalidInput("IMDB ID cannot be empty".to_string()));
    }

    state
        .provider
        .lookup_by_id(imdb_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Title {} not found", imdb_id)))
}

/// Full catalog record for one title
pub async fn details(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<CatalogDetails>> {
    Ok(Json(fetch_details(&state, &imdb_id).await?))
}

pub async fn watch_options(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<WatchOptions>> {
    let details = fetch_details(&state, &imdb_id).await?;
    Ok(Json(media_links::watch_options(&details.record)?))
}

pub async fn soundtrack(
    State(state): State<AppState>,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<SoundtrackLinks>> {
    let details = fetch_details(&state, &imdb_id).await?;
    Ok(Json(media_links::soundtrack_links(&details.record)?))
}
