use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Catalog (local cache) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// CSV file holding cached movies
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("movies.csv")
}

/// Remote fetcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
    /// Title search endpoint (e.g., "https://www.imdb.com/search/title/")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Browser-identifying User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Minimum number of user votes a title needs to be listed
    #[serde(default = "default_min_votes")]
    pub min_votes: u32,
    /// Maximum number of titles requested per genre
    #[serde(default = "default_count")]
    pub count: u32,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            min_votes: default_min_votes(),
            count: default_count(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.imdb.com/search/title/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"
        .to_string()
}

fn default_min_votes() -> u32 {
    10_000
}

fn default_count() -> u32 {
    20
}

fn default_timeout() -> u32 {
    30
}
