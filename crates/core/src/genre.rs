//! The fixed genre vocabulary used to scope queries and tag cached records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A movie genre selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Thriller,
    SciFi,
    Romance,
    Animation,
    Adventure,
}

/// Returned when a string does not name a known genre.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown genre: {0}")]
pub struct UnknownGenre(pub String);

impl Genre {
    /// All genres, in the order they are offered to the user.
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Romance,
        Genre::Animation,
        Genre::Adventure,
    ];

    /// Lower-case slug, as used in the remote query and in the catalog file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Horror => "horror",
            Genre::Thriller => "thriller",
            Genre::SciFi => "sci-fi",
            Genre::Romance => "romance",
            Genre::Animation => "animation",
            Genre::Adventure => "adventure",
        }
    }

    /// Human-readable label ("Sci-fi", "Horror").
    pub fn display_name(&self) -> String {
        let slug = self.as_str();
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}
