//! Directory client configuration
use std::env;
use std::time::Duration;

use journey_protocol::POKEAPI_URL;

/// How to reach the species directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// API root, always ending in `/`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("journey/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `JOURNEY_API_URL` - API root (default: `https://pokeapi.co/api/v2/`)
    /// - `JOURNEY_API_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `JOURNEY_USER_AGENT` - User-Agent header (default: `journey/<version>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env::<String>("JOURNEY_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(secs) = read_env::<u64>("JOURNEY_API_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(agent) = read_env::<String>("JOURNEY_USER_AGENT") {
            config.user_agent = agent;
        }

        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_pokeapi() {
        let config = DirectoryConfig::default();

        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("journey/"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = DirectoryConfig::default().with_base_url("http://localhost:8080/api/v2");

        assert_eq!(config.base_url, "http://localhost:8080/api/v2/");
    }
}
