use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, middleware::UserToken, models::FavoriteMovie};

use super::AppState;

pub async fn list(
    State(state): State<AppState>,
    token: UserToken,
) -> AppResult<Json<Vec<FavoriteMovie>>> {
    Ok(Json(state.favorites.list(&token.as_str()).await?))
}

pub async fn add(
    State(state): State<AppState>,
    token: UserToken,
    Json(movie): Json<FavoriteMovie>,
) -> AppResult<(StatusCode, Json<Vec<FavoriteMovie>>)> {
    let favorites = state.favorites.add(&token.as_str(), movie).await?;
    Ok((StatusCode::CREATED, Json(favorites)))
}

pub async fn remove(
    State(state): State<AppState>,
    token: UserToken,
    Path(imdb_id): Path<String>,
) -> AppResult<Json<Vec<FavoriteMovie>>> {
    Ok(Json(state.favorites.remove(&token.as_str(), &imdb_id).await?))
}
