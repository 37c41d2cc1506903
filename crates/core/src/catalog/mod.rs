//! Movie catalog - a cache of movies from previous fetches.
//!
//! The catalog stores fetch results per genre so future requests can be
//! answered locally before hitting the remote search page.

mod csv_store;
mod types;

pub use csv_store::CsvCatalog;
pub use types::*;

/// Trait for movie catalog storage.
pub trait MovieCatalog: Send + Sync {
    /// Look up cached movies for a genre (matched case-insensitively).
    ///
    /// Returns `None` on a cache miss. Read failures are logged and reported
    /// as a miss, never as an error.
    fn lookup(&self, genre: &str) -> Option<Vec<Movie>>;

    /// Merge freshly fetched movies into the catalog, tagged with `genre`.
    ///
    /// Deduplicates by (Title, Genre); the first occurrence wins, so rows
    /// already stored are never replaced by a later batch.
    fn merge(&self, movies: &[Movie], genre: &str) -> Result<MergeSummary, CatalogError>;

    /// Get catalog statistics.
    fn stats(&self) -> Result<CatalogStats, CatalogError>;
}
