//! Types for the movie catalog (fetch result cache).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rating stored when the source page shows no usable rating.
pub const RATING_UNAVAILABLE: &str = "N/A";

/// Header row of the catalog file. Order is significant.
pub const CATALOG_HEADER: [&str; 3] = ["Title", "Rating", "Genre"];

/// A movie as returned to callers: title plus rating, genre implied by the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title (non-empty, trimmed).
    pub title: String,
    /// Numeric rating text, or [`RATING_UNAVAILABLE`].
    pub rating: String,
}

impl Movie {
    /// Create a movie, trimming the title and normalizing a blank rating to the sentinel.
    pub fn new(title: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            rating: normalize_rating(&rating.into()),
        }
    }
}

/// A stored catalog row.
///
/// Serialized with the capitalized column names of the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Rating", default)]
    pub rating: String,
    /// Genre as it was given at merge time (case preserved).
    #[serde(rename = "Genre")]
    pub genre: String,
}

impl MovieRecord {
    /// Stamp a movie with the genre it was fetched for.
    pub fn from_movie(movie: &Movie, genre: &str) -> Self {
        Self {
            title: movie.title.clone(),
            rating: movie.rating.clone(),
            genre: genre.to_string(),
        }
    }

    /// Project back to the caller-facing shape.
    pub fn to_movie(&self) -> Movie {
        Movie::new(self.title.clone(), self.rating.clone())
    }

    /// Case-insensitive genre match.
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genre.trim().to_lowercase() == genre.trim().to_lowercase()
    }

    /// Deduplication identity: (Title, Genre), case-sensitive as stored.
    pub fn key(&self) -> (String, String) {
        (self.title.clone(), self.genre.clone())
    }
}

/// Outcome of a successful merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    /// Records from the batch that were new to the catalog.
    pub added: usize,
    /// Records from the batch dropped because their (Title, Genre) was already present.
    pub duplicates: usize,
    /// Records in the catalog after the merge.
    pub total: usize,
}

/// Catalog statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total cached records.
    pub total_records: usize,
    /// Record count per genre (lower-cased).
    pub genres: BTreeMap<String, usize>,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(String),

    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Failed to write catalog: {0}")]
    Write(String),
}

fn normalize_rating(rating: &str) -> String {
    let rating = rating.trim();
    if rating.is_empty() {
        RATING_UNAVAILABLE.to_string()
    } else {
        rating.to_string()
    }
}
