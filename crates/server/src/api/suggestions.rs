//! Suggestion API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use suggester_core::{Genre, Movie, MovieSource, SuggestError};
use tracing::warn;

use super::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenreInfo {
    pub slug: &'static str,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub genres: Vec<GenreInfo>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub genre: Genre,
    pub headline: String,
    pub pick: Movie,
    pub movies: Vec<Movie>,
    pub total: usize,
    pub source: MovieSource,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/genres
///
/// List the genres a suggestion can be requested for.
pub async fn list_genres() -> Json<GenreListResponse> {
    Json(GenreListResponse {
        genres: Genre::ALL
            .iter()
            .map(|g| GenreInfo {
                slug: g.as_str(),
                name: g.display_name(),
            })
            .collect(),
    })
}

/// GET /api/v1/suggestions/{genre}
///
/// Get the ranked movie list for a genre plus one random pick.
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let genre: Genre = genre
        .parse()
        .map_err(|e: suggester_core::UnknownGenre| error(StatusCode::BAD_REQUEST, e.to_string()))?;

    let Some(_guard) = state.try_begin_suggestion() else {
        return Err(error(
            StatusCode::CONFLICT,
            "A suggestion request is already in progress",
        ));
    };

    let mut rng = StdRng::from_entropy();
    let suggestion = match state.service().suggest(genre.as_str(), &mut rng).await {
        Ok(suggestion) => suggestion,
        Err(e @ SuggestError::Unavailable(_)) => {
            warn!(genre = %genre, error = %e, "Suggestion unavailable");
            return Err(error(StatusCode::BAD_GATEWAY, e.to_string()));
        }
        Err(e @ SuggestError::NoMovies(_)) => {
            return Err(error(StatusCode::NOT_FOUND, e.to_string()));
        }
    };

    Ok(Json(SuggestionResponse {
        genre,
        headline: suggestion.headline(),
        total: suggestion.movies.len(),
        pick: suggestion.pick,
        movies: suggestion.movies,
        source: suggestion.source,
    }))
}
