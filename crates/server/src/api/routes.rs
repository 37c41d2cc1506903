use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{catalog, handlers, suggestions};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Suggestions
        .route("/genres", get(suggestions::list_genres))
        .route("/suggestions/{genre}", get(suggestions::get_suggestions))
        // Catalog (fetch result cache)
        .route("/catalog/stats", get(catalog::get_stats))
        .route("/catalog/{genre}", get(catalog::get_genre_entries))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
