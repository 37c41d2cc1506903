//! Extraction of (title, rating) pairs from an IMDb title search page.

use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::FetchError;
use crate::catalog::{Movie, RATING_UNAVAILABLE};

const TITLE_CONTAINER: &str = r#"[class*="dli-title"]"#;
const TITLE_TEXT: &str = "h3.ipc-title__text";
const RATING_CONTAINER: &str = r#"[class*="dli-ratings-container"]"#;
const RATING_TEXT: &str = "span.ipc-rating-star--rating";

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(format!("invalid selector {css}: {e:?}")))
}

/// Parse a search results page into at most `limit` movies, in page order.
///
/// Entries without a usable title are dropped individually; a missing or
/// non-numeric rating becomes the unavailable sentinel. A page with no
/// result entries yields an empty list.
pub fn parse_search_page(html: &str, limit: usize) -> Result<Vec<Movie>, FetchError> {
    let document = Html::parse_document(html);

    let container_sel = selector(TITLE_CONTAINER)?;
    let title_sel = selector(TITLE_TEXT)?;
    let rating_container_sel = selector(RATING_CONTAINER)?;
    let rating_sel = selector(RATING_TEXT)?;
    let numeric = Regex::new(r"^\d+(\.\d+)?$")
        .map_err(|e| FetchError::Parse(format!("invalid rating pattern: {e}")))?;

    let mut movies = Vec::new();
    let mut found = 0usize;

    for container in document.select(&container_sel) {
        found += 1;

        let title = match container.select(&title_sel).next() {
            Some(el) => collapse_text(el),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let rating = container
            .parent()
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.select(&rating_container_sel).next())
            .and_then(|ratings| ratings.select(&rating_sel).next())
            .map(collapse_text)
            .filter(|r| numeric.is_match(r))
            .unwrap_or_else(|| RATING_UNAVAILABLE.to_string());

        movies.push(Movie::new(title, rating));
        if movies.len() >= limit {
            break;
        }
    }

    debug!(containers = found, movies = movies.len(), "Parsed search page");
    Ok(movies)
}

fn collapse_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
