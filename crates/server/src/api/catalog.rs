//! Catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use suggester_core::{CatalogStats, Genre, Movie};

use super::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogEntriesResponse {
    pub genre: Genre,
    pub movies: Vec<Movie>,
    pub total: usize,
}

/// GET /api/v1/catalog/stats
///
/// Get catalog statistics.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogStats>, impl IntoResponse> {
    match state.catalog().stats() {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// GET /api/v1/catalog/{genre}
///
/// List cached movies for a genre without touching the network.
pub async fn get_genre_entries(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> Result<Json<CatalogEntriesResponse>, impl IntoResponse> {
    let genre: Genre = match genre.parse() {
        Ok(g) => g,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            ))
        }
    };

    match state.catalog().lookup(genre.as_str()) {
        Some(movies) => Ok(Json(CatalogEntriesResponse {
            genre,
            total: movies.len(),
            movies,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No cached movies for genre: {}", genre),
            }),
        )),
    }
}
