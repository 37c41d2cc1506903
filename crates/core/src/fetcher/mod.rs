//! Remote movie fetching.
//!
//! A `MovieFetcher` turns a genre into a ranked list of movies from a remote
//! source. The IMDb implementation issues one GET against the title search
//! page and extracts (title, rating) pairs from the returned HTML.

mod imdb;
mod parser;

pub use imdb::ImdbFetcher;
pub use parser::parse_search_page;

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Movie;

/// Errors that can occur when fetching movies.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The remote returned a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response could not be read or its structure was not understood.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The fetcher settings cannot produce a valid request.
    #[error("Invalid fetcher configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = e.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else if e.is_decode() || e.is_body() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Trait for remote movie sources.
///
/// Implementations return movies best-first, bounded to a fixed count.
/// Titles are non-empty and trimmed; ratings are numeric text or the
/// unavailable sentinel.
#[async_trait]
pub trait MovieFetcher: Send + Sync {
    /// Name of this source (e.g., "imdb").
    fn name(&self) -> &str;

    /// Fetch the ranked movie list for a genre.
    async fn fetch(&self, genre: &str) -> Result<Vec<Movie>, FetchError>;
}
