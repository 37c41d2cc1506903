//! IMDb title search fetcher.
//!
//! Requests the advanced title search page sorted by user rating and scrapes
//! the result list. No retries: a failed request is reported to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::parser::parse_search_page;
use super::{FetchError, MovieFetcher};
use crate::catalog::Movie;
use crate::config::FetcherConfig;

/// Fetches ranked movie lists from the IMDb title search page.
pub struct ImdbFetcher {
    client: Client,
    config: FetcherConfig,
}

impl ImdbFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FetchError::Config(format!("invalid User-Agent: {}", e)))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the search URL for a genre.
    fn build_search_url(&self, genre: &str) -> String {
        format!(
            "{}?genres={}&sort=user_rating,desc&title_type=feature&num_votes={},&count={}",
            self.config.base_url,
            urlencoding::encode(&genre.trim().to_lowercase()),
            self.config.min_votes,
            self.config.count
        )
    }
}

#[async_trait]
impl MovieFetcher for ImdbFetcher {
    fn name(&self) -> &str {
        "imdb"
    }

    async fn fetch(&self, genre: &str) -> Result<Vec<Movie>, FetchError> {
        let url = self.build_search_url(genre);
        debug!(url = %url, "Fetching movie list");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Parse(format!("Failed to read response body: {}", e))
            }
        })?;

        debug!(bytes = html.len(), "Search page received");

        parse_search_page(&html, self.config.count as usize)
    }
}
