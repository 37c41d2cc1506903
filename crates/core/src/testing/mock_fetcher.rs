//! Mock movie fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::Movie;
use crate::fetcher::{FetchError, MovieFetcher};

/// Mock implementation of the MovieFetcher trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable movies per genre (unknown genres return an empty list)
/// - Track fetched genres for assertions
/// - Simulate failures and slow responses
///
/// # Example
///
/// ```rust,ignore
/// use suggester_core::testing::{MockFetcher, fixtures};
///
/// let fetcher = MockFetcher::new();
/// fetcher.set_movies("sci-fi", fixtures::sci_fi_movies()).await;
///
/// let movies = fetcher.fetch("Sci-Fi").await?;
/// assert_eq!(movies.len(), 2);
/// assert_eq!(fetcher.fetch_count().await, 1);
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    /// Movies by lower-cased genre.
    movies: Arc<RwLock<HashMap<String, Vec<Movie>>>>,
    /// Genres passed to `fetch`, in call order.
    fetches: Arc<RwLock<Vec<String>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<FetchError>>>,
    /// Artificial latency applied to every fetch.
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockFetcher {
    /// Create a new mock fetcher with no configured movies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movies returned for a genre.
    pub async fn set_movies(&self, genre: &str, movies: Vec<Movie>) {
        self.movies
            .write()
            .await
            .insert(genre.to_lowercase(), movies);
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: FetchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Delay every fetch by `delay`.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Genres fetched so far.
    pub async fn recorded_fetches(&self) -> Vec<String> {
        self.fetches.read().await.clone()
    }

    /// Number of fetches performed (including failed ones).
    pub async fn fetch_count(&self) -> usize {
        self.fetches.read().await.len()
    }
}

#[async_trait]
impl MovieFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, genre: &str) -> Result<Vec<Movie>, FetchError> {
        self.fetches.write().await.push(genre.to_string());

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        Ok(self
            .movies
            .read()
            .await
            .get(&genre.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
