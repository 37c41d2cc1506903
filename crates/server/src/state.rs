use std::sync::Arc;

use suggester_core::{Config, MovieCatalog, SuggestionService};
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state
pub struct AppState {
    config: Config,
    service: Arc<SuggestionService>,
    /// Held for the duration of a suggestion request.
    in_flight: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config, service: Arc<SuggestionService>) -> Self {
        Self {
            config,
            service,
            in_flight: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &SuggestionService {
        self.service.as_ref()
    }

    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.service.catalog()
    }

    /// Claim the single suggestion slot, or `None` if a request is already running.
    pub fn try_begin_suggestion(&self) -> Option<MutexGuard<'_, ()>> {
        self.in_flight.try_lock().ok()
    }
}
