use std::env;
use std::time::Duration;

/// Default lifetime of a cached sector scan (15 minutes).
pub const DEFAULT_SCAN_CACHE_TTL_SECS: u64 = 15 * 60;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// How long a sector scan report is served from cache.
    pub scan_cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            scan_cache_ttl: Duration::from_secs(DEFAULT_SCAN_CACHE_TTL_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        let scan_cache_ttl = env::var("SCAN_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.scan_cache_ttl);

        Self {
            host,
            port,
            scan_cache_ttl,
        }
    }

    /// Socket address string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
