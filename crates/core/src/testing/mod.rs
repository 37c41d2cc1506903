//! Testing utilities and mock implementations.
//!
//! This module provides a mock of the remote fetcher so the suggestion flow
//! can be exercised end to end without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use suggester_core::testing::{fixtures, MockFetcher};
//!
//! let fetcher = MockFetcher::new();
//! fetcher.set_movies("sci-fi", fixtures::sci_fi_movies()).await;
//!
//! // Use in SuggestionService...
//! ```

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Movie;

    /// Create a movie.
    pub fn movie(title: &str, rating: &str) -> Movie {
        Movie::new(title, rating)
    }

    /// Two sci-fi movies, best first.
    pub fn sci_fi_movies() -> Vec<Movie> {
        vec![movie("Dune", "8.6"), movie("Alien", "8.4")]
    }

    /// A ranked list of `count` movies with descending ratings.
    pub fn ranked_movies(prefix: &str, count: usize) -> Vec<Movie> {
        (0..count)
            .map(|i| {
                let rating = 9.0 - (i as f32) * 0.1;
                movie(&format!("{} {}", prefix, i + 1), &format!("{:.1}", rating))
            })
            .collect()
    }

    /// Catalog file contents with the given (title, rating, genre) rows.
    pub fn catalog_csv(rows: &[(&str, &str, &str)]) -> String {
        let mut out = String::from("Title,Rating,Genre\n");
        for (title, rating, genre) in rows {
            out.push_str(&format!("{},{},{}\n", title, rating, genre));
        }
        out
    }
}
