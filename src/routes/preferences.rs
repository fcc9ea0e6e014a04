use axum::{extract::State, Json};

use crate::{error::AppResult, middleware::UserToken, models::UserPreferences};

use super::AppState;

pub async fn get(
    State(state): State<AppState>,
    token: UserToken,
) -> AppResult<Json<UserPreferences>> {
    Ok(Json(state.favorites.get_preferences(&token.as_str()).await?))
}

pub async fn update(
    State(state): State<AppState>,
    token: UserToken,
    Json(preferences): Json<UserPreferences>,
) -> AppResult<Json<UserPreferences>> {
    let saved = state
        .favorites
        .save_preferences(&token.as_str(), preferences)
        .await?;
    tracing::info!(user_token = %token, "Preferences saved");
    Ok(Json(saved))
}
