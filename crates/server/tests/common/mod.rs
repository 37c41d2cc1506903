//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock fetcher and a CSV catalog in a temporary directory, enabling
//! API testing without network access.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use suggester_core::{
    testing::MockFetcher, CatalogConfig, Config, CsvCatalog, MovieCatalog, MovieFetcher,
    SuggestionService,
};

/// Re-export fixtures for test convenience
pub use suggester_core::testing::fixtures;

/// Test fixture for API testing with a mock fetcher.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_suggestions() {
///     let fixture = TestFixture::new();
///     fixture.fetcher.set_movies("sci-fi", fixtures::sci_fi_movies()).await;
///
///     let response = fixture.get("/api/v1/suggestions/sci-fi").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock fetcher - configure remote results
    pub fetcher: Arc<MockFetcher>,
    /// Path of the catalog file
    pub catalog_path: PathBuf,
    /// Temporary directory holding the catalog
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("movies.csv");

        let fetcher = Arc::new(MockFetcher::new());

        let config = Config {
            catalog: CatalogConfig {
                path: catalog_path.clone(),
            },
            ..Default::default()
        };

        let catalog: Arc<dyn MovieCatalog> = Arc::new(CsvCatalog::new(catalog_path.clone()));
        let service = Arc::new(SuggestionService::new(
            catalog,
            Arc::clone(&fetcher) as Arc<dyn MovieFetcher>,
        ));

        let state = Arc::new(suggester_server::state::AppState::new(config, service));
        let router = suggester_server::api::create_router(state);

        Self {
            router,
            fetcher,
            catalog_path,
            temp_dir,
        }
    }

    /// Seed the catalog file with raw contents.
    pub fn write_catalog(&self, contents: &str) {
        std::fs::write(&self.catalog_path, contents).expect("Failed to write catalog");
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
