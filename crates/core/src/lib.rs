pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod genre;
pub mod suggestion;
pub mod testing;

pub use catalog::{
    CatalogError, CatalogStats, CsvCatalog, MergeSummary, Movie, MovieCatalog, MovieRecord,
    RATING_UNAVAILABLE,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    FetcherConfig, ServerConfig,
};
pub use fetcher::{FetchError, ImdbFetcher, MovieFetcher};
pub use genre::{Genre, UnknownGenre};
pub use suggestion::{
    pick_random, MovieSource, SuggestError, Suggestion, SuggestionOutcome,
    SuggestionService,
};
