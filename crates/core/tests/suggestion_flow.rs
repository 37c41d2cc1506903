//! Suggestion flow integration tests.
//!
//! These tests run the suggestion service against a real CSV catalog in a
//! temporary directory and a mock fetcher:
//! lookup -> (miss) fetch -> merge -> return

use std::fs;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use suggester_core::{
    testing::{fixtures, MockFetcher},
    CsvCatalog, FetchError, MovieCatalog, MovieSource, SuggestError, SuggestionOutcome,
    SuggestionService,
};

/// Test helper wiring a CSV catalog and a mock fetcher into a service.
struct TestHarness {
    service: SuggestionService,
    catalog: Arc<CsvCatalog>,
    fetcher: Arc<MockFetcher>,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self::with_catalog_path(temp_dir.path().join("movies.csv"), temp_dir)
    }

    fn with_catalog_path(path: std::path::PathBuf, temp_dir: TempDir) -> Self {
        let catalog = Arc::new(CsvCatalog::new(path));
        let fetcher = Arc::new(MockFetcher::new());
        let service = SuggestionService::new(catalog.clone(), fetcher.clone());
        Self {
            service,
            catalog,
            fetcher,
            _temp_dir: temp_dir,
        }
    }

    fn write_catalog(&self, contents: &str) {
        fs::write(self.catalog.path(), contents).expect("Failed to write catalog");
    }

    fn read_catalog(&self) -> String {
        fs::read_to_string(self.catalog.path()).unwrap_or_default()
    }
}

#[tokio::test]
async fn test_fetch_on_empty_catalog_persists_results() {
    let harness = TestHarness::new();
    harness.write_catalog("");
    harness
        .fetcher
        .set_movies("sci-fi", fixtures::sci_fi_movies())
        .await;

    let outcome = harness.service.get_movies_for_genre("sci-fi").await;

    assert_eq!(
        outcome,
        SuggestionOutcome::Fetched {
            movies: fixtures::sci_fi_movies(),
            persisted: true,
        }
    );
    assert_eq!(
        harness.read_catalog(),
        "Title,Rating,Genre\nDune,8.6,sci-fi\nAlien,8.4,sci-fi\n"
    );
}

#[tokio::test]
async fn test_cache_hit_skips_fetch() {
    let harness = TestHarness::new();
    harness.write_catalog(&fixtures::catalog_csv(&[("Dune", "8.6", "sci-fi")]));
    harness
        .fetcher
        .set_movies("sci-fi", fixtures::sci_fi_movies())
        .await;

    let outcome = harness.service.get_movies_for_genre("sci-fi").await;

    assert_eq!(
        outcome,
        SuggestionOutcome::Cached(vec![fixtures::movie("Dune", "8.6")])
    );
    assert_eq!(harness.fetcher.fetch_count().await, 0);
}

#[tokio::test]
async fn test_transport_error_is_unavailable_and_catalog_untouched() {
    let harness = TestHarness::new();
    let original = fixtures::catalog_csv(&[("Casablanca", "8.5", "drama")]);
    harness.write_catalog(&original);
    harness
        .fetcher
        .set_next_error(FetchError::Network("connection refused".to_string()))
        .await;

    let outcome = harness.service.get_movies_for_genre("sci-fi").await;

    assert!(matches!(outcome, SuggestionOutcome::Unavailable { .. }));
    assert!(outcome.movies().is_none());
    assert_eq!(harness.read_catalog(), original);
}

#[tokio::test]
async fn test_failed_fetch_is_retried_on_next_request() {
    let harness = TestHarness::new();
    harness
        .fetcher
        .set_movies("horror", vec![fixtures::movie("The Thing", "8.2")])
        .await;
    harness.fetcher.set_next_error(FetchError::Timeout).await;

    let first = harness.service.get_movies_for_genre("horror").await;
    assert!(first.movies().is_none());

    let second = harness.service.get_movies_for_genre("horror").await;
    assert_eq!(second.source(), Some(MovieSource::Remote));
    assert_eq!(harness.fetcher.fetch_count().await, 2);
}

#[tokio::test]
async fn test_merge_keeps_unrelated_genres() {
    let harness = TestHarness::new();
    harness.write_catalog(&fixtures::catalog_csv(&[
        ("Casablanca", "8.5", "drama"),
        ("Vertigo", "8.3", "drama"),
        ("Amadeus", "8.4", "drama"),
    ]));
    harness
        .fetcher
        .set_movies(
            "comedy",
            vec![
                fixtures::movie("Airplane!", "7.7"),
                fixtures::movie("Groundhog Day", "8.0"),
            ],
        )
        .await;

    harness.service.get_movies_for_genre("comedy").await;

    assert_eq!(harness.catalog.lookup("drama").unwrap().len(), 3);
    assert_eq!(harness.catalog.lookup("comedy").unwrap().len(), 2);
    assert_eq!(harness.catalog.stats().unwrap().total_records, 5);
}

#[tokio::test]
async fn test_second_request_is_identical_cache_hit() {
    let harness = TestHarness::new();
    harness
        .fetcher
        .set_movies("thriller", fixtures::ranked_movies("Thriller", 20))
        .await;

    let first = harness.service.get_movies_for_genre("thriller").await;
    let second = harness.service.get_movies_for_genre("thriller").await;

    assert_eq!(first.movies(), second.movies());
    assert_eq!(first.source(), Some(MovieSource::Remote));
    assert_eq!(second.source(), Some(MovieSource::Cache));
    assert_eq!(harness.fetcher.fetch_count().await, 1);
}

#[tokio::test]
async fn test_empty_fetch_is_empty_not_absent() {
    let harness = TestHarness::new();

    let outcome = harness.service.get_movies_for_genre("romance").await;

    assert_eq!(outcome, SuggestionOutcome::Empty);
    assert_eq!(outcome.movies(), Some(&[][..]));
    assert!(!harness.catalog.path().exists());
}

#[tokio::test]
async fn test_genre_lookup_is_case_insensitive() {
    let harness = TestHarness::new();
    harness.write_catalog(&fixtures::catalog_csv(&[
        ("The Thing", "8.2", "horror"),
        ("Alien", "8.5", "horror"),
    ]));

    let lower = harness.service.get_movies_for_genre("horror").await;
    let title = harness.service.get_movies_for_genre("Horror").await;
    let upper = harness.service.get_movies_for_genre("HORROR").await;

    assert_eq!(lower, title);
    assert_eq!(lower, upper);
    assert_eq!(harness.fetcher.fetch_count().await, 0);
}

#[tokio::test]
async fn test_write_failure_still_returns_movies() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("no-such-dir").join("movies.csv");
    let harness = TestHarness::with_catalog_path(path, temp_dir);
    harness
        .fetcher
        .set_movies("action", vec![fixtures::movie("Heat", "8.3")])
        .await;

    let outcome = harness.service.get_movies_for_genre("action").await;

    assert_eq!(
        outcome,
        SuggestionOutcome::Fetched {
            movies: vec![fixtures::movie("Heat", "8.3")],
            persisted: false,
        }
    );

    // Nothing was cached, so the next request goes to the network again.
    harness.service.get_movies_for_genre("action").await;
    assert_eq!(harness.fetcher.fetch_count().await, 2);
}

#[tokio::test]
async fn test_corrupt_catalog_is_miss_and_gets_recreated() {
    let harness = TestHarness::new();
    harness.write_catalog("Name,Score\nDune,8.6\n");
    harness
        .fetcher
        .set_movies("sci-fi", fixtures::sci_fi_movies())
        .await;

    let outcome = harness.service.get_movies_for_genre("sci-fi").await;
    assert_eq!(outcome.source(), Some(MovieSource::Remote));

    assert!(harness.read_catalog().starts_with("Title,Rating,Genre\n"));
    let again = harness.service.get_movies_for_genre("sci-fi").await;
    assert_eq!(again.source(), Some(MovieSource::Cache));
}

#[tokio::test]
async fn test_suggest_picks_from_list() {
    let harness = TestHarness::new();
    harness
        .fetcher
        .set_movies("adventure", fixtures::ranked_movies("Adventure", 5))
        .await;
    let mut rng = StdRng::seed_from_u64(3);

    let suggestion = harness
        .service
        .suggest("adventure", &mut rng)
        .await
        .expect("expected a suggestion");

    assert!(suggestion.headline().starts_with("You can watch this movie today: "));

    assert_eq!(suggestion.genre, "adventure");
    assert_eq!(suggestion.movies.len(), 5);
    assert!(suggestion.movies.contains(&suggestion.pick));
    assert_eq!(suggestion.source, MovieSource::Remote);
}

#[tokio::test]
async fn test_suggest_distinguishes_empty_from_unavailable() {
    let harness = TestHarness::new();
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(
        harness.service.suggest("animation", &mut rng).await,
        Err(SuggestError::NoMovies("animation".to_string()))
    );

    harness.fetcher.set_next_error(FetchError::Timeout).await;
    assert!(matches!(
        harness.service.suggest("animation", &mut rng).await,
        Err(SuggestError::Unavailable(_))
    ));
}
