use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_user_token, user_token_middleware};

pub mod favorites;
pub mod preferences;
pub mod search;
pub mod state;
pub mod titles;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(user_token_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_user_token))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/intent", get(search::intent))
        .route("/titles/:imdb_id", get(titles::details))
        .route("/titles/:imdb_id/watch", get(titles::watch_options))
        .route("/titles/:imdb_id/soundtrack", get(titles::soundtrack))
        .route("/favorites", get(favorites::list).post(favorites::add))
        .route("/favorites/:imdb_id", delete(favorites::remove))
        .route("/preferences", get(preferences::get).put(preferences::update))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
