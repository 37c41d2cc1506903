//! Suggestion service - cache-first movie retrieval.
//!
//! The service answers "movies for genre X" from the catalog when it can and
//! otherwise fetches from the remote source, persisting non-empty results so
//! the next request for the same genre is a cache hit.

mod types;

pub use types::*;

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::catalog::{Movie, MovieCatalog};
use crate::fetcher::MovieFetcher;

/// Orchestrates catalog lookup, remote fetch and catalog merge.
pub struct SuggestionService {
    catalog: Arc<dyn MovieCatalog>,
    fetcher: Arc<dyn MovieFetcher>,
}

impl SuggestionService {
    /// Create a service over the given catalog and fetcher.
    pub fn new(catalog: Arc<dyn MovieCatalog>, fetcher: Arc<dyn MovieFetcher>) -> Self {
        Self { catalog, fetcher }
    }

    /// Get the catalog backing this service.
    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.catalog.as_ref()
    }

    /// Get the ranked movie list for a genre.
    ///
    /// Makes no network call on a cache hit. On a miss, performs exactly one
    /// fetch; a non-empty result is merged into the catalog (best-effort) and
    /// returned even if the merge fails.
    pub async fn get_movies_for_genre(&self, genre: &str) -> SuggestionOutcome {
        if let Some(movies) = self.catalog.lookup(genre) {
            info!(genre = genre, count = movies.len(), "Loaded movies from catalog");
            return SuggestionOutcome::Cached(movies);
        }

        info!(genre = genre, source = self.fetcher.name(), "Catalog miss, fetching movies");

        let movies = match self.fetcher.fetch(genre).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!(genre = genre, error = %e, "Failed to fetch movies");
                return SuggestionOutcome::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        if movies.is_empty() {
            info!(genre = genre, "Fetch returned no movies");
            return SuggestionOutcome::Empty;
        }

        let persisted = match self.catalog.merge(&movies, genre) {
            Ok(_) => true,
            Err(e) => {
                warn!(genre = genre, error = %e, "Fetched movies were not cached");
                false
            }
        };

        info!(genre = genre, count = movies.len(), persisted = persisted, "Fetched movies");
        SuggestionOutcome::Fetched { movies, persisted }
    }

    /// Get the movie list for a genre and pick one of them at random.
    ///
    /// A failed fetch and an empty result are reported separately.
    pub async fn suggest<R: Rng + ?Sized>(
        &self,
        genre: &str,
        rng: &mut R,
    ) -> Result<Suggestion, SuggestError> {
        match self.get_movies_for_genre(genre).await {
            SuggestionOutcome::Unavailable { reason } => Err(SuggestError::Unavailable(reason)),
            outcome => Suggestion::from_outcome(genre, outcome, rng)
                .ok_or_else(|| SuggestError::NoMovies(genre.to_string())),
        }
    }
}

/// Choose one movie uniformly at random.
pub fn pick_random<'a, R: Rng + ?Sized>(movies: &'a [Movie], rng: &mut R) -> Option<&'a Movie> {
    movies.choose(rng)
}
