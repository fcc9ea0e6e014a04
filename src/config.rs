use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Redis connection URL. Favorites fall back to an in-memory store when unset.
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for a single catalog call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of candidates enriched with a detail lookup per search
    #[serde(default = "default_enrichment_limit")]
    pub enrichment_limit: usize,

    /// Maximum number of free keywords used as seed terms
    #[serde(default = "default_max_keyword_seeds")]
    pub max_keyword_seeds: usize,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    8
}

fn default_enrichment_limit() -> usize {
    80
}

fn default_max_keyword_seeds() -> usize {
    3
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Tunables for the search orchestrator
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub request_timeout: Duration,
    pub enrichment_limit: usize,
    pub max_keyword_seeds: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
            enrichment_limit: default_enrichment_limit(),
            max_keyword_seeds: default_max_keyword_seeds(),
        }
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            enrichment_limit: config.enrichment_limit,
            max_keyword_seeds: config.max_keyword_seeds,
        }
    }
}
