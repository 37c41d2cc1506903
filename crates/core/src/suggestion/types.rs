//! Result types for the suggestion service.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pick_random;
use crate::catalog::Movie;

/// Where a movie list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSource {
    /// Served from the local catalog.
    Cache,
    /// Fetched from the remote source during this request.
    Remote,
}

/// Outcome of a "movies for genre" request.
///
/// Every branch of the load-or-fetch-and-save flow has its own variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// Catalog hit; no network call was made.
    Cached(Vec<Movie>),
    /// Catalog miss, fetch returned movies. `persisted` is false when the
    /// catalog write failed.
    Fetched { movies: Vec<Movie>, persisted: bool },
    /// Catalog miss, fetch succeeded but found nothing.
    Empty,
    /// Catalog miss and the fetch failed.
    Unavailable { reason: String },
}

impl SuggestionOutcome {
    /// The movies, possibly empty, or `None` when they could not be retrieved.
    pub fn movies(&self) -> Option<&[Movie]> {
        match self {
            SuggestionOutcome::Cached(movies) => Some(movies),
            SuggestionOutcome::Fetched { movies, .. } => Some(movies),
            SuggestionOutcome::Empty => Some(&[]),
            SuggestionOutcome::Unavailable { .. } => None,
        }
    }

    /// Owned variant of [`SuggestionOutcome::movies`].
    pub fn into_movies(self) -> Option<Vec<Movie>> {
        match self {
            SuggestionOutcome::Cached(movies) => Some(movies),
            SuggestionOutcome::Fetched { movies, .. } => Some(movies),
            SuggestionOutcome::Empty => Some(Vec::new()),
            SuggestionOutcome::Unavailable { .. } => None,
        }
    }

    /// Source of the movies, for outcomes that carry any.
    pub fn source(&self) -> Option<MovieSource> {
        match self {
            SuggestionOutcome::Cached(_) => Some(MovieSource::Cache),
            SuggestionOutcome::Fetched { .. } => Some(MovieSource::Remote),
            SuggestionOutcome::Empty | SuggestionOutcome::Unavailable { .. } => None,
        }
    }
}

/// Why no suggestion could be made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// The catalog missed and the remote fetch failed.
    #[error("No movies found or an error occurred: {0}")]
    Unavailable(String),
    /// The genre has no movies, cached or remote.
    #[error("No movies found for genre: {0}")]
    NoMovies(String),
}

/// A random pick plus the full ranked list it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Genre as requested.
    pub genre: String,
    /// The movie to watch today.
    pub pick: Movie,
    /// Full ranked list.
    pub movies: Vec<Movie>,
    /// Whether the list came from the catalog or the remote source.
    pub source: MovieSource,
}

impl Suggestion {
    /// Draw a random pick from an outcome's movies.
    ///
    /// `None` for empty and unavailable outcomes.
    pub fn from_outcome<R: Rng + ?Sized>(
        genre: &str,
        outcome: SuggestionOutcome,
        rng: &mut R,
    ) -> Option<Self> {
        let source = outcome.source()?;
        let movies = outcome.into_movies()?;
        let pick = pick_random(&movies, rng)?.clone();

        Some(Self {
            genre: genre.to_string(),
            pick,
            movies,
            source,
        })
    }

    /// One-line recommendation for display.
    pub fn headline(&self) -> String {
        format!(
            "You can watch this movie today: {} (Rating: {})",
            self.pick.title, self.pick.rating
        )
    }
}
