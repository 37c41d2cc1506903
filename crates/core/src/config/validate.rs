use reqwest::header::HeaderValue;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog path is not empty
/// - Fetcher endpoint and User-Agent are set, count and timeout are non-zero
/// - User-Agent is a valid HTTP header value
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.catalog.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.path cannot be empty".to_string(),
        ));
    }

    let fetcher = &config.fetcher;
    if fetcher.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "fetcher.base_url cannot be empty".to_string(),
        ));
    }
    if fetcher.user_agent.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "fetcher.user_agent cannot be empty".to_string(),
        ));
    }
    if let Err(e) = HeaderValue::from_str(&fetcher.user_agent) {
        return Err(ConfigError::ValidationError(format!(
            "fetcher.user_agent is not a valid header value: {}",
            e
        )));
    }
    if fetcher.count == 0 {
        return Err(ConfigError::ValidationError(
            "fetcher.count cannot be 0".to_string(),
        ));
    }
    if fetcher.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "fetcher.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
